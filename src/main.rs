use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use nifty::{
    lexer::lexer::{tokenize, TokenStream},
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: nifty <file>");
        exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let tokens = match tokenize(file_contents) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}: {}", file_name, err);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let stream = TokenStream::new(tokens, Some(String::from(file_name)))
        .with_path(PathBuf::from(file_path));
    let (parser, nodes) = parse(stream);

    println!("Parsed in {:?}", parse_start.elapsed());

    if parser.finished_with_errors() {
        eprintln!("Finished with {} parse error(s).", parser.error_count());
        exit(1);
    }

    println!("Parsed {} top-level node(s) in {:?}", nodes.len(), start.elapsed());
    println!("{:#?}", nodes);
}
