// Stats browser entry point.

use ffdash_core::AppKind;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    ffdash_tui::launch(AppKind::Stats).await
}
