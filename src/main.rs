// cmtree: C- parser with Graphviz parse tree output

use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;

use cmtree::dot::write_dot;
use cmtree::parser::parse::Parser;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("cmtree");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <input_file> [output_dot_file]", program_name);
        eprintln!();
        eprintln!("Parses a C- source file and writes its parse tree to the given");
        eprintln!("output path (default: parse_tree.dot) in Graphviz DOT format.");
        process::exit(1);
    }

    let input_file = &args[1];
    let output_file = args.get(2).map(|s| s.as_str()).unwrap_or("parse_tree.dot");

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        process::exit(1);
    }

    let source = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: Cannot read '{}': {}", input_file, err);
            process::exit(1);
        }
    };

    let mut tree = match Parser::new(&source).parse() {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    tree.assign_ids();

    let file = match File::create(output_file) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error: Could not open '{}' for writing: {}", output_file, err);
            process::exit(1);
        }
    };

    let mut out = BufWriter::new(file);
    let written = write_dot(&tree, &mut out).and_then(|_| out.flush());
    if let Err(err) = written {
        eprintln!("Error: Failed to write '{}': {}", output_file, err);
        process::exit(1);
    }

    println!("Parse tree saved to: {}", output_file);
    println!("To visualize: dot -Tpng {} -o parse_tree.png", output_file);
}
