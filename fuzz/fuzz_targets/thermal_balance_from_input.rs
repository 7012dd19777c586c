#![no_main]

use libfuzzer_sys::fuzz_target;
use room_heat_balance::core::thermal_balance::MAX_TEMPERATURE_CHANGE;
use room_heat_balance::input::Input;

fuzz_target!(|input: Input| {
    let Ok(room) = input.room() else {
        return;
    };
    if let Ok(balance) = room.thermal_balance() {
        assert!(
            balance.temperature_change.is_nan()
                || balance.temperature_change.abs() <= MAX_TEMPERATURE_CHANGE
        );
    }
});
