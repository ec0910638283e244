use async_trait::async_trait;
use std::io;
use std::process::{Output, Stdio};
use tokio::process::Command as TokioCommand;

// Seam between the extractor and the OS so tests can fake process output
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtractorRunner: Send + Sync {
    async fn run_extractor(&self, program: &str, args: &[String]) -> io::Result<Output>;
}

pub struct RealExtractorRunner;

#[async_trait]
impl ExtractorRunner for RealExtractorRunner {
    async fn run_extractor(&self, program: &str, args: &[String]) -> io::Result<Output> {
        TokioCommand::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // child exits if the caller's deadline drops this future
            .kill_on_drop(true)
            .output()
            .await
    }
}
