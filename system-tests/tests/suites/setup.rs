// system-tests/tests/suites/setup.rs
// ============================================================================
// Module: Setup Suite
// Description: Post-setup state scenario for the cleanup precondition.
// Purpose: Verify the application-data area is empty once setup completes.
// Dependencies: system-tests helpers, typing-client
// ============================================================================

use crate::helpers::fixture;
use crate::helpers::report::ScenarioReporter;
use crate::helpers::report::conclude;
use crate::helpers::supervisor::supervise;
use crate::helpers::timeouts::SCENARIO_TIMEOUT;

#[tokio::test(flavor = "multi_thread")]
async fn verify_app_data_area_is_empty_after_setup() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = ScenarioReporter::new("verify_app_data_area_is_empty_after_setup")?;
    let result = supervise("verify_app_data_area_is_empty_after_setup", SCENARIO_TIMEOUT, async {
        let context = fixture::run_context().await?;
        let drive = context.drive_client()?;

        let files = drive.list_files(context.token()).await.map_err(|err| err.to_string())?;
        if !files.is_empty() {
            return Err(format!(
                "app data folder still holds {} files after setup",
                files.len()
            ));
        }
        Ok(())
    })
    .await;
    conclude(&mut reporter, result, "cleanup leaves zero files in the app data folder")
}
