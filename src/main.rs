use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus::models::{AddDualRoleInput, AddFacultyInput, AddStudentInput, Rank};
use campus::University;

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "In-memory university registry: students, faculty, and courses")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a sample registry and print the reporting views
    Demo {
        /// Emit the reports as JSON instead of text tables
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "campus=debug".into()),
    );

    // Log to stderr so stdout stays clean for report output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Demo { json }) => run_demo(json),
        None => run_demo(false),
    }
}

/// Seeds a sample registry, exercises enrollment and teaching assignment,
/// and prints the three reporting views.
fn run_demo(json: bool) -> anyhow::Result<()> {
    let mut university = University::new();

    let ada = university.add_faculty(AddFacultyInput {
        name: "Ada".to_string(),
        age: 40,
        department: "CS".to_string(),
        rank: Rank::FullProf,
    })?;
    let grace = university.add_faculty(AddFacultyInput {
        name: "Grace".to_string(),
        age: 49,
        department: "CS".to_string(),
        rank: Rank::AssociateProf,
    })?;
    let linus = university.add_student(AddStudentInput {
        name: "Linus".to_string(),
        age: 21,
        major: "CS".to_string(),
        gpa: 3.4,
    })?;
    let barbara = university.add_student(AddStudentInput {
        name: "Barbara".to_string(),
        age: 23,
        major: "Math".to_string(),
        gpa: 3.9,
    })?;
    let donald = university.add_dual_role(AddDualRoleInput {
        name: "Donald".to_string(),
        age: 30,
        major: "CS".to_string(),
        gpa: 4.0,
        department: "Math".to_string(),
        rank: Rank::Lecturer,
    })?;

    university.add_course("Algorithms", "CS301")?;
    university.add_course("Operating Systems", "CS350")?;
    university.assign_instructor("CS301", ada, false)?;
    university.assign_instructor("CS350", grace, false)?;

    university.enroll(linus, "CS301")?;
    university.enroll(linus, "CS350")?;
    university.enroll(barbara, "CS301")?;
    university.enroll(donald, "CS350")?;

    // Barbara quit; she stays on every report, flagged inactive.
    university.deactivate(barbara)?;

    if json {
        let report = serde_json::json!({
            "students": university.list_students(),
            "faculty": university.list_faculty(),
            "courses": university.list_courses(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Students");
    for row in university.list_students() {
        println!(
            "  {:<4} {:<10} {:<10} {:.2}  {}",
            row.id,
            row.name,
            row.major,
            row.gpa,
            row.status.as_str()
        );
    }

    println!("\nFaculty");
    for row in university.list_faculty() {
        println!(
            "  {:<4} {:<10} {:<10} {}",
            row.id,
            row.name,
            row.department,
            row.rank.as_str()
        );
    }

    println!("\nCourses");
    for row in university.list_courses() {
        println!(
            "  {:<6} {:<20} {:<10} [{}]",
            row.code,
            row.name,
            row.instructor.as_deref().unwrap_or("-"),
            row.students.join(", ")
        );
    }

    println!("\nCourses of Linus");
    for course in university.courses_of_student(linus)? {
        println!("  {:<6} {}", course.code, course.name);
    }

    println!("\nStudents taught by Ada");
    for member in university.students_of_faculty(ada)? {
        println!("  {:<4} {}", member.id(), member.name());
    }

    Ok(())
}
