//! CLI for evalreport - renders generated evaluation reports to HTML/DOCX

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use evalreport::{
    extract_plain_text, to_json, ConfiguredTemplate, EvaluationPrompt, JsonFormat,
    ReportConverter, ReportOptions, TemplateConfig,
};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render report text to HTML, DOCX and/or JSON
    Render {
        /// Report text file ("-" reads stdin)
        input: PathBuf,

        /// Write the HTML rendering here (prints to stdout if no output is given)
        #[arg(long)]
        html: Option<PathBuf>,

        /// Write the DOCX document here
        #[arg(long)]
        docx: Option<PathBuf>,

        /// Write the parsed block model as JSON here
        #[arg(long)]
        json: Option<PathBuf>,

        /// Emit a complete HTML page instead of a fragment
        #[arg(long)]
        standalone: bool,

        /// JSON file describing section and metadata markers
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Build the evaluation prompt from résumé, job description and transcript
    Prompt {
        /// Résumé (.txt, .docx or .pdf)
        #[arg(long)]
        resume: PathBuf,

        /// Job description (.txt, .docx or .pdf)
        #[arg(long)]
        jd: PathBuf,

        /// Interview transcript (.txt)
        #[arg(long)]
        transcript: PathBuf,

        /// Report date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Command::Render {
            input,
            html,
            docx,
            json,
            standalone,
            template,
        } => render(&input, html, docx, json, standalone, template),
        Command::Prompt {
            resume,
            jd,
            transcript,
            date,
        } => prompt(&resume, &jd, &transcript, date),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> evalreport::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn render(
    input: &Path,
    html: Option<PathBuf>,
    docx: Option<PathBuf>,
    json: Option<PathBuf>,
    standalone: bool,
    template: Option<PathBuf>,
) -> evalreport::Result<()> {
    let mut options = ReportOptions::default().with_standalone_html(standalone);
    if let Some(path) = template {
        let config = TemplateConfig::from_json(&std::fs::read_to_string(&path)?)?;
        options = options.with_template(ConfiguredTemplate::new(config)?);
    }

    let converter = ReportConverter::new(options);
    let text = read_input(input)?;
    let report = converter.parse(&text);

    if let Some(path) = &json {
        std::fs::write(path, to_json(&report, JsonFormat::Pretty)?)?;
        println!("Wrote JSON to {:?}", path);
    }

    if let Some(path) = &docx {
        std::fs::write(path, converter.render_docx(&report)?)?;
        println!("Wrote DOCX to {:?}", path);
    }

    let page = converter.render_html(&report);
    match html {
        Some(path) => {
            std::fs::write(&path, page)?;
            println!("Wrote HTML to {:?}", path);
        }
        None if docx.is_none() && json.is_none() => println!("{}", page),
        None => {}
    }
    Ok(())
}

fn prompt(
    resume: &Path,
    jd: &Path,
    transcript: &Path,
    date: Option<NaiveDate>,
) -> evalreport::Result<()> {
    let mut prompt = EvaluationPrompt::new(
        extract_plain_text(resume)?,
        extract_plain_text(jd)?,
        extract_plain_text(transcript)?,
    );
    if let Some(date) = date {
        prompt = prompt.report_date(date);
    }

    println!("[SYSTEM]\n{}\n", prompt.system_message());
    println!("[USER]\n{}", prompt.user_message());
    Ok(())
}
