use bladestyle_core::analyze;

fn main() {
    let style = "StyleNormalPtr<AudioFlicker<Blue,DodgerBlue>,WHITE,300,800>()";

    match analyze(style, "example.style") {
        Ok(result) => {
            let canonical = result.to_style_string().unwrap();
            println!("Canonical style:\n{canonical}\n");
            let json_output = result.to_json().unwrap();
            println!("Successfully parsed style to JSON:\n{json_output}");
        }
        Err(e) => {
            eprintln!("Failed to parse style: {:?}", miette::Report::new(e));
        }
    }
}
