use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use comfy_table::{Cell, ContentArrangement, Table};
use slipway_app::{App, WorkflowSession};
use slipway_core::form::ForkTargetType;
use slipway_core::presentation::{
    clone_badge, fork_action_label, mirror_action_label, tools_badge, verification_badge,
};
use slipway_core::stage::{CloneStatus, ToolsStatus, VerificationStatus};
use slipway_core::tools::{TOOL_CATALOG, ToolKind};
use slipway_core::tree::TreeItemKind;

use crate::cli::{Cli, Command, RunArgs};
use crate::doctor::run_doctor;

pub fn run_with_deps(cli: Cli, app: &App) -> Result<()> {
    match cli.command {
        Command::Run(args) => run_workflow(app, args),
        Command::Tools => {
            print_tool_catalog();
            Ok(())
        }
        Command::Doctor => run_doctor_command(),
    }
}

fn run_workflow(app: &App, args: RunArgs) -> Result<()> {
    let config = app.load_optional_config()?;
    let mut session = match &config {
        Some(config) => app.session_with_defaults(config),
        None => app.session(),
    };

    session.form.repo_url = args.repo_url;
    if let Some(value) = args.fork_target {
        session.form.fork_target = value;
    }
    if let Some(value) = args.gitlab_namespace {
        session.form.gitlab_namespace = value;
    }
    if let Some(value) = args.gitlab_project {
        session.form.gitlab_project = value;
    }
    if let Some(value) = args.clone_path {
        session.form.clone_path = value;
    }
    if args.personal {
        session.form.fork_target_type = ForkTargetType::Personal;
    }

    for id in &args.tools {
        let Some(tool) = ToolKind::from_id(id) else {
            bail!("unknown tool '{id}'; expected audit, refit, drydock, or docs");
        };
        if !session.selection.contains(tool) {
            session.toggle_tool(tool);
        }
    }

    print_readiness(&session);
    if !session.form.can_clone() {
        bail!(
            "not ready to clone; provide --repo-url, --fork-target, --gitlab-namespace, and --gitlab-project (or set defaults in the config)"
        );
    }

    session.clone_repo();
    wait_for(&mut session, |session| {
        session.stage().clone != CloneStatus::Running
    })?;
    if session.stage().clone == CloneStatus::Failed {
        bail!("clone failed; see stage status");
    }

    session.run_tools();
    wait_for(&mut session, |session| {
        session.stage().tools != ToolsStatus::Running
    })?;
    println!("{}", session.tool_run_summary());
    if session.stage().tools == ToolsStatus::Failed {
        bail!("tool run failed");
    }

    if session.has_changes() {
        print_changed_files(&session);
        print_file_tree(&mut session);
    }

    session.run_docker_test();
    wait_for(&mut session, |session| {
        session.stage().verification != VerificationStatus::Running
    })?;
    print_verification_log(&session);

    if args.force_publish {
        session.set_publish_override(true);
    }

    print_stages(&session);
    print_publish_actions(&session);
    if let Ok(stamp) = slipway_core::time::completion_stamp() {
        println!("{stamp}");
    }
    Ok(())
}

fn run_doctor_command() -> Result<()> {
    let report = run_doctor();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Check", "Status", "Details"]);
    for check in &report.checks {
        table.add_row(vec![
            Cell::new(check.name.as_str()),
            Cell::new(check.state.to_string()),
            Cell::new(check.details.as_str()),
        ]);
    }

    println!("{table}");
    println!("{}", report.summary());
    if report.has_failures() {
        bail!("doctor found failing checks");
    }
    Ok(())
}

/// Pump collaborator channels until `done`, with a hard cap so a hung
/// collaborator cannot wedge the process.
fn wait_for(
    session: &mut WorkflowSession,
    done: impl Fn(&WorkflowSession) -> bool,
) -> Result<()> {
    for _ in 0..1000 {
        session.on_tick();
        if done(session) {
            return Ok(());
        }
        thread::sleep(Duration::from_millis(5));
    }
    bail!("timed out waiting for a collaborator response")
}

fn print_readiness(session: &WorkflowSession) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Gate", "Ready"]);
    table.add_row(vec!["project", yes_no(session.form.project_ready())]);
    table.add_row(vec!["fork", yes_no(session.form.fork_ready())]);
    table.add_row(vec!["mirror", yes_no(session.form.mirror_ready())]);
    println!("{table}");
}

fn print_stages(session: &WorkflowSession) {
    let stage = session.stage();
    let clone = clone_badge(stage.clone);
    let tools = tools_badge(stage.tools);
    let verification = verification_badge(stage.verification);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stage", "Status", "Tone"]);
    table.add_row(vec!["clone", clone.label, clone.tone.as_str()]);
    table.add_row(vec!["tools", tools.label, tools.tone.as_str()]);
    table.add_row(vec![
        "verification",
        verification.label,
        verification.tone.as_str(),
    ]);
    println!("{table}");
}

fn print_tool_catalog() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tool", "Name", "Description"]);
    for tool in TOOL_CATALOG {
        table.add_row(vec![tool.id(), tool.label(), tool.description()]);
    }
    println!("{table}");
}

fn print_changed_files(session: &WorkflowSession) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Path", "Status", "Summary"]);
    for file in session.files() {
        table.add_row(vec![
            Cell::new(file.path.as_str()),
            Cell::new(file.status_label.as_str()),
            Cell::new(file.summary.as_str()),
        ]);
    }
    println!("{table}");
}

fn print_file_tree(session: &mut WorkflowSession) {
    for item in session.file_tree() {
        let indent = "  ".repeat(item.depth);
        let marker = match item.kind {
            TreeItemKind::Dir => "/",
            TreeItemKind::File => "",
        };
        println!("{indent}{}{marker}", item.label);
    }
}

fn print_verification_log(session: &WorkflowSession) {
    for line in session.verify_log() {
        println!("[{}] {}", line.tone.as_str(), line.message);
    }
}

fn print_publish_actions(session: &WorkflowSession) {
    println!("{}", fork_action_label(&session.form));
    println!("{}", mirror_action_label(&session.form));
    if session.can_publish() {
        println!("Publish actions unlocked.");
    } else {
        println!("Publish actions locked until verification succeeds.");
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
