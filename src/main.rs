use jobseed::run;

fn main() -> anyhow::Result<()> {
    // Fully sequential tool; one thread is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run())
}
