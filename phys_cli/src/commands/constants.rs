use phys_core::constants::PHYSICAL_CONSTANTS;

use crate::support::print_json;

pub fn run(json_output: bool) {
    if json_output {
        print_json(&PHYSICAL_CONSTANTS);
        return;
    }

    println!("  {:<8} {:<28} {:>16}  {}", "Symbol", "Name", "Value", "Unit");
    for constant in PHYSICAL_CONSTANTS {
        println!(
            "  {:<8} {:<28} {:>16e}  {}",
            constant.symbol, constant.name, constant.value, constant.unit
        );
    }
}
