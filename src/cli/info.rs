//! Info command.

use crate::cli::output;
use crate::core::constants;
use crate::error::Result;

/// Show the fixed SDK settings and declared dependency coordinates.
pub fn execute() -> Result<()> {
    output::section("Application");
    output::kv("application id", constants::APPLICATION_ID);
    output::kv("namespace", constants::NAMESPACE);
    output::kv(
        "version",
        format!("{} ({})", constants::VERSION_NAME, constants::VERSION_CODE),
    );

    output::section("SDK");
    output::kv("compile sdk", constants::COMPILE_SDK);
    output::kv("target sdk", constants::TARGET_SDK);
    output::kv("min sdk", constants::MIN_SDK);
    output::kv("ndk", constants::NDK_VERSION);
    output::kv("java", constants::JAVA_VERSION);

    output::section("Dependencies");
    for (configuration, coordinate) in constants::DEPENDENCIES {
        output::list_item(&format!("{} {}", configuration, coordinate));
    }

    Ok(())
}
