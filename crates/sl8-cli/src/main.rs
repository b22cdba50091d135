mod notation;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sl8_core::{Field, InteractionEvent, InteractionTable, Morphism, Processor, TraceSink};
use sl8_dsl::Expr;

#[derive(Parser)]
#[command(name = "sl8", about = "Σλ⁸ rewriting engine CLI")]
struct Cli {
    /// Log every applied interaction to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a program in glyph notation, e.g. "¬ ¬" or "λ ( I ) @"
    Eval {
        /// Program text; ( ) delimit blocks
        program: String,
    },

    /// Print one interaction table cell
    Lookup {
        context: String,
        operator: String,
        operand: String,
    },

    /// Print a context's table plane as dominant-morphism glyphs
    Table { context: String },

    /// List the basis morphisms
    Basis,

    /// Compile and evaluate the built-in conditional example
    Demo,
}

/// Forwards interaction events to the tracing channel.
struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, event: &InteractionEvent) {
        tracing::debug!(
            step = event.step,
            context = %event.context,
            operator = %event.operator,
            operand = %event.operand,
            table_hit = event.table_hit,
            "interaction"
        );
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_morphism(name: &str) -> Result<Morphism> {
    name.parse::<Morphism>()
        .with_context(|| format!("invalid morphism argument {name:?}"))
}

/// Active weights of a field, one line.
fn format_field(field: &Field) -> String {
    let active: Vec<String> = Morphism::ALL
        .iter()
        .filter(|&&m| field[m] > 0.0)
        .map(|&m| format!("{}: {:.3}", m, field[m]))
        .collect();
    if active.is_empty() {
        "[empty]".to_string()
    } else {
        format!("{{ {} }} (sum {:.3})", active.join(", "), field.sum())
    }
}

fn report_result(processor: &Processor<'_>) {
    let field = processor.field();
    println!("field: {}", format_field(field));
    match field.dominant() {
        Some(m) => println!("dominant: {m}"),
        None => println!("dominant: none"),
    }
    if field.is_true() {
        println!("decodes: true");
    } else if field.is_false() {
        println!("decodes: false");
    }
    println!("steps: {}", processor.steps());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let table = InteractionTable::build();

    match cli.command {
        Commands::Eval { program } => {
            let derivation =
                notation::parse(&program).context("failed to parse program")?;
            let mut processor = Processor::new(&table);
            processor.evaluate_traced(&derivation, &mut LogSink);
            report_result(&processor);
        }

        Commands::Lookup {
            context,
            operator,
            operand,
        } => {
            let context = parse_morphism(&context)?;
            let operator = parse_morphism(&operator)?;
            let operand = parse_morphism(&operand)?;
            let cell = table.lookup(context, operator, operand);
            println!(
                "[{context}][{operator}][{operand}] = {}",
                format_field(cell)
            );
        }

        Commands::Table { context } => {
            let context = parse_morphism(&context)?;
            print!("ctx {context} |");
            for operand in Morphism::ALL {
                print!(" {operand:>2}");
            }
            println!();
            for operator in Morphism::ALL {
                print!("  {operator:>3} |");
                for operand in Morphism::ALL {
                    let dominant = table
                        .lookup(context, operator, operand)
                        .dominant()
                        .map(|m| m.glyph())
                        .unwrap_or(".");
                    print!(" {dominant:>2}");
                }
                println!();
            }
        }

        Commands::Basis => {
            for m in Morphism::ALL {
                println!("{:>2}  {m:?}", m.glyph());
            }
        }

        Commands::Demo => {
            let expr = Expr::if_else(
                Expr::bool(true),
                Expr::concat(Expr::text("hello"), Expr::text("world")),
                Expr::text("goodbye"),
            );
            let program = sl8_dsl::compile(&expr);
            println!("program: {}", notation::render(&program));

            let mut processor = Processor::new(&table);
            processor.evaluate_traced(&program, &mut LogSink);
            report_result(&processor);
        }
    }

    Ok(())
}
