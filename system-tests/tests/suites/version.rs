// system-tests/tests/suites/version.rs
// ============================================================================
// Module: Version Suite
// Description: Version endpoint contract scenario.
// Purpose: Verify the service identifies itself with the product marker.
// Dependencies: system-tests helpers, typing-client
// ============================================================================

use typing_client::VersionInfo;
use typing_client::version::PRODUCT_MARKER;

use crate::helpers::asserts::ensure_status;
use crate::helpers::fixture;
use crate::helpers::report::ScenarioReporter;
use crate::helpers::report::conclude;
use crate::helpers::supervisor::supervise;
use crate::helpers::timeouts::SCENARIO_TIMEOUT;

#[tokio::test(flavor = "multi_thread")]
async fn verify_version_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = ScenarioReporter::new("verify_version_endpoint")?;
    let result = supervise("verify_version_endpoint", SCENARIO_TIMEOUT, async {
        let context = fixture::run_context().await?;
        let version = context.version_client()?;

        let response = version.fetch().await.map_err(|err| err.to_string())?;
        ensure_status("version fetch", &response, 200)?;
        let info: VersionInfo = response.decode().map_err(|err| err.to_string())?;
        if !info.version.contains(PRODUCT_MARKER) {
            return Err(format!(
                "version string '{}' does not contain '{PRODUCT_MARKER}'",
                info.version
            ));
        }
        Ok(())
    })
    .await;
    conclude(&mut reporter, result, "version string carries the product marker")
}
