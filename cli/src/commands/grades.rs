use std::io::{BufRead, Write};

use academia_common::config::Config;
use academia_common::validate;
use academia_core::adapters::outbound::export::{JsonExporter, TxtExporter};
use academia_core::adapters::outbound::notify;
use academia_core::application::services::gradebook::GradebookService;
use academia_core::domain::models::gradebook::{GradeCalculator, PassFailEvaluator};
use academia_core::ports::outbound::report_exporter::ReportExporter;
use anyhow::bail;
use tracing::warn;

use crate::terminal::print;
use crate::terminal::prompt::Prompt;

const MENU: &[&str] = &[
    "1. Add Student",
    "2. Add Grade to Student",
    "3. Show Student Reports",
    "4. Export Report (TXT/JSON)",
    "5. Exit",
];

pub fn grades<R: BufRead, W: Write>(cfg: &Config, prompt: &mut Prompt<R, W>) -> anyhow::Result<()> {
    let evaluator = PassFailEvaluator::new(GradeCalculator, cfg.passing_score);
    let mut service = GradebookService::new(evaluator, notify::notifier(cfg.notifier));

    loop {
        writeln!(prompt.out())?;
        print::header(prompt.out(), "student management system", cfg.quiet)?;
        for entry in MENU {
            writeln!(prompt.out(), "{entry}")?;
        }

        let Some(choice) = prompt.ask("Choose an option: ")? else {
            break;
        };
        let outcome = match choice.as_str() {
            "1" => add_student(&mut service, prompt),
            "2" => add_grade(&mut service, prompt),
            "3" => show_reports(&service, prompt),
            "4" => export_report(cfg, &service, prompt),
            "5" => {
                writeln!(prompt.out(), "Goodbye!")?;
                break;
            }
            _ => Err(anyhow::anyhow!("Invalid option. Please choose 1-5.")),
        };

        if let Err(err) = outcome {
            warn!("grade book action failed: {err}");
            print::error(prompt.out(), &err)?;
        }
    }
    Ok(())
}

fn add_student<R: BufRead, W: Write>(
    service: &mut GradebookService,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<()> {
    let student_id = prompt.field("Student ID: ")?;
    let name = prompt.field("Name: ")?;
    let message = service.add_student(&name, &student_id)?;
    print::success(prompt.out(), &message)?;
    Ok(())
}

fn add_grade<R: BufRead, W: Write>(
    service: &mut GradebookService,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<()> {
    let student_id = prompt.field("Student ID: ")?;
    service.registry().require(&student_id)?;

    let subject = prompt.field("Subject: ")?;
    let score = validate::parse_number("Score", &prompt.field("Score: ")?)?;
    let added = service.add_grade(&student_id, &subject, score)?;
    if let Some(alert) = added.alert {
        writeln!(prompt.out(), "{alert}")?;
    }
    print::success(prompt.out(), &added.message)?;
    Ok(())
}

fn show_reports<R: BufRead, W: Write>(
    service: &GradebookService,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<()> {
    let reports = service.reports();
    if reports.is_empty() {
        print::info(prompt.out(), "No students found.")?;
        return Ok(());
    }
    for report in reports {
        writeln!(prompt.out(), "{}", report.render())?;
    }
    Ok(())
}

fn export_report<R: BufRead, W: Write>(
    cfg: &Config,
    service: &GradebookService,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<()> {
    let student_id = prompt.field("Student ID: ")?;
    service.registry().require(&student_id)?;

    let exporter: &dyn ReportExporter = match prompt.field("Export as TXT or JSON? ")?.to_lowercase().as_str() {
        "txt" => &TxtExporter,
        "json" => &JsonExporter,
        _ => bail!("Invalid export type. Choose TXT or JSON."),
    };
    let message = service.export(&student_id, exporter, &cfg.data_dir)?;
    writeln!(prompt.out(), "{message}")?;
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
