use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("sovran_kwargs=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}
