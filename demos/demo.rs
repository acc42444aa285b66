use schemargs::CommandLine;

fn main() {
    let args = CommandLine::new("demo", "l,p#,d*,r##").build().parse();

    println!("logging: {}", args.get_bool('l'));
    println!("port: {}", args.get_int('p'));
    println!("directory: {}", args.get_string('d'));
    println!("ratio: {}", args.get_double('r'));
}
