pub mod roi;
pub mod search;

use crate::roi::{RoiReport, RoiRequest};
use crate::search::{SearchHit, SearchRequest};

#[tarpc::service]
pub trait Site {
    /// Heartbeat
    async fn ping() -> String;

    /// Run the ROI calculator on raw form input
    async fn compute_roi(req: RoiRequest) -> RoiReport;

    /// Keyword search over the site content.
    /// Fails only when the requested language is unknown.
    async fn search(req: SearchRequest) -> Result<Vec<SearchHit>, String>;
}
