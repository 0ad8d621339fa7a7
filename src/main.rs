// Codificador de Instrumentos - codes policy instruments in PDF documents
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use codificador::aggregate;
use codificador::batch::{self, Outcome};
use codificador::export;
use codificador::pdf_text::PdfFile;
use codificador::taxonomy::Taxonomy;
use codificador::types::Hit;

#[derive(Parser, Debug)]
#[command(author, version, about = "Codifica instrumentos de políticas públicas em documentos PDF segundo a classe (substantivo ou procedimental) e o tipo (nodalidade, autoridade, tesouro ou organização)")]
struct Args {
    /// Arquivos PDF a analisar
    #[arg(required = true)]
    pdf_files: Vec<PathBuf>,

    /// Diretório de saída das tabelas exportadas
    #[arg(short, long, default_value = "resultado_codificacao")]
    output: PathBuf,

    /// Também grava o relatório completo em JSON
    #[arg(long)]
    json: bool,

    /// Suprime as linhas de progresso
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Taxonomy is fixed process-wide; a malformed entry is fatal up front
    let taxonomy = Taxonomy::standard();
    taxonomy.validate()?;

    let sources: Vec<PdfFile> = args.pdf_files.into_iter().map(PdfFile::new).collect();

    let quiet = args.quiet;
    let report = batch::run(&sources, taxonomy, |p| {
        if !quiet {
            eprintln!("[{}/{}] {}", p.done, p.total, p.document);
        }
    });

    for failure in &report.failures {
        eprintln!("Erro ao ler {}: {}", failure.document, failure.reason);
    }

    match report.outcome() {
        Outcome::NothingFound => {
            println!("Nenhum termo da taxonomia foi encontrado nos documentos processados.");
        }
        Outcome::Found(hits) => {
            println!(
                "Análise concluída: {} termos identificados em {} documento(s).",
                hits.len(),
                report.documents_processed
            );
            print_summaries(hits);

            let sheets = export::build_workbook(hits);
            export::write_workbook(&sheets, &args.output)?;
            println!("Tabelas exportadas para {}/", args.output.display());

            if args.json {
                let path = args.output.join("relatorio.json");
                std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
                println!("Relatório JSON gravado em {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_summaries(hits: &[Hit]) {
    println!("\nPor Classe");
    for g in aggregate::by_condition(hits) {
        println!("  {:<16} {:>6}", g.label, g.total);
    }

    println!("\nPor Tipo");
    for g in aggregate::by_category(hits) {
        println!("  {:<16} {:>6}", g.label, g.total);
    }

    println!("\nCruzamento");
    for c in aggregate::cross_tab(hits) {
        println!("  {:<16} {:<16} {:>6}", c.condition, c.category, c.rows);
    }
}
