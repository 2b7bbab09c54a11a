use configs::DEFAULT_WORKER_THREADS;

fn main() -> anyhow::Result<()> {
    let cfg = server::startup::load_config()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cfg.server.worker_threads.unwrap_or(DEFAULT_WORKER_THREADS))
        .enable_all()
        .build()?;

    runtime.block_on(server::run(cfg))
}
