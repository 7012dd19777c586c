use room_heat_balance::input::Input;
use schemars::schema_for;

fn main() -> Result<(), serde_json::Error> {
    let schema = schema_for!(Input);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
