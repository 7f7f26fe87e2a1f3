use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jobboard_core::companies::ALL_INDUSTRIES;
use jobboard_core::{AdvancedFilterState, FilterQuery, JobFilterEngine};
use jobboard_web::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "jobboard-cli")]
#[command(about = "Job board command-line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter the catalog and print one page of results.
    Search(SearchArgs),
    /// Print the number of postings per category.
    Categories,
    /// Browse the company directory.
    Companies(CompaniesArgs),
    /// Run the web server.
    Serve,
}

#[derive(Debug, Args, Default)]
struct SearchArgs {
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = "")]
    category: String,
    /// Advanced filter snapshot as JSON, e.g. '{"workingSchedule":{"fullTime":true}}'.
    #[arg(long)]
    filters: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    page: Option<i64>,
    /// Print the page as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct CompaniesArgs {
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = ALL_INDUSTRIES)]
    industry: String,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli
        .command
        .unwrap_or_else(|| Commands::Search(SearchArgs::default()))
    {
        Commands::Search(args) => {
            let catalog = config.catalog_source().load().await?;
            let engine = run_search(JobFilterEngine::new(catalog, config.page_size), &args)?;
            if args.json {
                let page = serde_json::json!({
                    "jobs": engine.current_jobs(),
                    "filtered_count": engine.result_count(),
                    "page": engine.current_page(),
                    "total_pages": engine.total_pages(),
                    "heading": engine.heading(),
                });
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print_page(&engine);
            }
        }
        Commands::Categories => {
            let catalog = config.catalog_source().load().await?;
            let engine = JobFilterEngine::new(catalog, config.page_size);
            for row in engine.category_counts() {
                println!("{:<12} {} jobs", row.category.label(), row.count);
            }
        }
        Commands::Companies(args) => {
            let directory = jobboard_core::companies::CompanyDirectory::mock();
            let page = directory.search(&args.search, &args.industry, args.page);
            for company in &page.companies {
                println!(
                    "{} | {} | {} | {} employees | {} open jobs | {:.1}",
                    company.name,
                    company.industry,
                    company.location,
                    company.employees,
                    company.jobs,
                    company.rating
                );
            }
            println!(
                "page {}/{} ({} companies)",
                page.page, page.total_pages, page.total
            );
        }
        Commands::Serve => {
            info!(port = config.web_port, "starting web server");
            jobboard_web::serve(&config).await?;
        }
    }

    Ok(())
}

fn run_search(mut engine: JobFilterEngine, args: &SearchArgs) -> Result<JobFilterEngine> {
    let advanced_filters: AdvancedFilterState = match args.filters.as_deref() {
        Some(raw) if !raw.trim().is_empty() => {
            serde_json::from_str(raw).context("parsing --filters as JSON")?
        }
        _ => AdvancedFilterState::default(),
    };
    engine.apply(FilterQuery {
        search_term: args.search.clone(),
        selected_category: args.category.clone(),
        advanced_filters,
    });
    if let Some(page) = args.page {
        engine.set_current_page(page);
    }
    Ok(engine)
}

fn print_page(engine: &JobFilterEngine) {
    println!("{} ({})", engine.heading(), engine.result_count());
    if !engine.has_results() {
        println!("No jobs found");
        println!("Try adjusting your search or filters to find more opportunities.");
        return;
    }
    for job in engine.current_jobs() {
        println!(
            "[{}] {} at {} | {} | {} | {} | {}",
            job.id, job.title, job.company, job.location, job.job_type, job.experience, job.salary
        );
    }
    if engine.needs_pagination() {
        println!("page {}/{}", engine.current_page(), engine.total_pages());
    }
}
