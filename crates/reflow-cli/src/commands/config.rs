use reflow_core::config::ConvertOptions;
use reflow_core::error::ReflowError;

pub fn print_defaults() -> Result<(), ReflowError> {
    let json = serde_json::to_string_pretty(&ConvertOptions::default())?;
    println!("{json}");
    Ok(())
}
