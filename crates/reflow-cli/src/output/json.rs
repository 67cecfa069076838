use reflow_core::error::ReflowError;
use reflow_core::model::OutputBlock;

pub fn print(blocks: &[OutputBlock]) -> Result<(), ReflowError> {
    let json = serde_json::to_string_pretty(blocks)?;
    println!("{json}");
    Ok(())
}
