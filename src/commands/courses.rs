use crate::{
    db::storage::Storage,
    libs::{config::Config, course::CoursePage, view::View},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CoursesArgs {
    /// Page size; values below 1 are raised to 1
    #[arg(long, allow_hyphen_values = true)]
    per_page: Option<i64>,
}

pub async fn cmd(storage: &Storage, config: &Config, courses_args: CoursesArgs) -> Result<()> {
    let courses = storage.courses().await?;

    let per_page = match courses_args.per_page {
        Some(n) => n.max(1) as usize,
        None => config.display.courses_per_page.max(1),
    };

    let page = CoursePage {
        data: courses.list(per_page).await?,
        total: courses.count().await?,
        per_page,
    };
    View::courses(&page)
}
