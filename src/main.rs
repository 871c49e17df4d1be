// main.rs
//
// Walks all eight lessons with their default worked examples, printing each
// step-by-step solution and, with the svg-io feature, writing every figure to
// the svg/ folder.

use roundel::{CircleComponent, Screen, Session, compute};

#[cfg(feature = "svg-io")]
use roundel::build_params;

fn main() {
    #[cfg(feature = "svg-io")]
    let _ = std::fs::create_dir_all("svg");

    for component in CircleComponent::ALL {
        let inputs = component.default_inputs();

        println!("== {} ==", component.label());
        println!("   {}", component.description());
        for line in component.formula_lines() {
            println!("   {line}");
        }

        match compute(component, &inputs) {
            Ok(result) => {
                for step in &result.steps {
                    println!("   {:24} {} = {:.4}", step.label, step.expression, step.value);
                }
                println!("   => {:.2} {}", result.value, result.unit.label());
            },
            Err(error) => println!("   rejected: {error}"),
        }

        #[cfg(feature = "svg-io")]
        match build_params(component, &inputs) {
            Ok(params) => {
                let document = roundel::render::svg_document(&params);
                let path = format!("svg/{}.svg", component.slug());
                if let Err(error) = svg::save(&path, &document) {
                    println!("   could not write {path}: {error}");
                }
            },
            Err(error) => println!("   no figure: {error}"),
        }

        println!();
    }

    // A quick walk of the navigation flow the lesson screens hang off of.
    let mut session = Session::new();
    session.go_to(Screen::Lesson(CircleComponent::Area));
    while session.current() != Screen::Menu {
        session.next();
    }
    session.back();
    println!(
        "navigation walk finished on {:?} with {} screens in the back stack",
        session.current(),
        session.history_len()
    );
}
