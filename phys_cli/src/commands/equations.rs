use phys_core::equations::{equations_in, ALL_EQUATIONS};
use phys_core::Equation;

use crate::support::{parse_category_or_exit, print_json};

pub fn run(category: Option<String>, json_output: bool) {
    let equations: Vec<Equation> = match category {
        Some(c) => equations_in(parse_category_or_exit(&c)),
        None => ALL_EQUATIONS.to_vec(),
    };

    if json_output {
        let metadata: Vec<_> = equations.iter().map(|eq| eq.metadata()).collect();
        print_json(&metadata);
        return;
    }

    println!("  {:<10} {:<32} {:<24} {}", "Id", "Name", "Formula", "Solve for");
    for eq in &equations {
        let meta = eq.metadata();
        println!(
            "  {:<10} {:<32} {:<24} {}",
            meta.id,
            meta.name,
            meta.formula_plain,
            eq.supported_targets().join(", ")
        );
    }
    println!();
    println!("  {} equation(s)", equations.len());
}
