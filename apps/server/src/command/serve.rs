use super::{Command, build_engine};
use crate::error::Result;
use crate::config::Config;
use futures::{future, prelude::*};
use search_core::{SiteSearch, rpc_compat};
use std::fs;
use std::sync::Arc;
use tracing::info;

use rpc::{
    Site,
    roi::{RoiReport, RoiRequest},
    search::{SearchHit, SearchRequest},
};
use tarpc::{
    context::Context,
    server::{self, Channel},
    tokio_serde::formats::Bincode
};

async fn spawn(fut: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(fut);
}

#[derive(Clone)]
struct Server {
    engine: Arc<SiteSearch>,
}

impl Site for Server {
    async fn ping(self, _c: Context) -> String {
        "Pong".to_string()
    }

    async fn compute_roi(self, _c: Context, req: RoiRequest) -> RoiReport {
        let input = req.to_input();
        info!("收到 ROI 计算请求: {:?}", input);
        RoiReport::from(::roi::compute_roi(&input))
    }

    async fn search(self, _c: Context, req: SearchRequest) -> std::result::Result<Vec<SearchHit>, String> {
        rpc_compat::search_sync(&self.engine, &req)
    }
}

pub struct ServeCommand {
    config: Config
}

impl ServeCommand {
    pub fn new(cfg: Config) -> Self {
        Self {
            config: cfg
        }
    }
}

#[async_trait::async_trait]
impl Command for ServeCommand {
    async fn execute(&self) -> Result<()> {
        let unix_socket_path = ::config::socket_path(&self.config.runtime_dir);

        if let Some(parent) = unix_socket_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if unix_socket_path.exists() {
            fs::remove_file(&unix_socket_path)?;
        }

        let engine = Arc::new(build_engine(&self.config)?);
        info!("语料库已加载，共 {} 个条目", engine.corpus().len());
        info!("监听 {:?}", unix_socket_path);

        let listener = tarpc::serde_transport::unix::listen(&unix_socket_path, Bincode::default).await?;

        let server = Server { engine };

        listener
            .filter_map(|r| future::ready(r.ok()))
            .map(server::BaseChannel::with_defaults)
            .map(|channel| {
                let server = server.clone();
                channel.execute(server.serve()).for_each(spawn)
            })
            .buffer_unordered(10)
            .for_each(|_| async {})
            .await;

        Ok(())
    }
}
