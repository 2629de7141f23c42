//! Plain-text rendering of view state

use relocate_client::{
    DashboardView, HousingView, JobsView, LocationsView, LogisticsView, ProgressView,
    ResourcesView, Session, TimelineView, VisaView,
};
use relocate_types::{
    Completion, HousingMarket, JobListing, LocationProfile, ProgressItem, TimelineStep,
};

const BAR_WIDTH: usize = 20;

pub fn bar(completion: Completion, width: usize) -> String {
    let filled = if completion.total == 0 {
        0
    } else {
        (completion.completed.min(completion.total) * width) / completion.total
    };
    format!(
        "[{}{}] {}/{} ({}%)",
        "#".repeat(filled),
        ".".repeat(width - filled),
        completion.completed,
        completion.total,
        completion.percentage()
    )
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn overview(view: &DashboardView, session: &Session) {
    let overview = view.overview();
    println!("{}", session.greeting());
    println!();
    println!("Timeline     {}", bar(view.completion(), BAR_WIDTH));
    println!("In progress  {}", overview.in_progress);
    println!("Urgent       {}", overview.urgent_tasks);
}

fn step_line(step: &TimelineStep) -> String {
    let mut line = format!(
        "{} {}  {} ({}, {})",
        checkbox(step.is_completed),
        step.id,
        step.title,
        step.category,
        step.priority
    );
    if let Some(notes) = &step.notes {
        line.push_str(&format!("\n      note: {}", notes));
    }
    line
}

pub fn timeline(view: &TimelineView) {
    println!("Overall  {}", bar(view.completion(), BAR_WIDTH));
    for category in view.categories() {
        println!(
            "  {:<12} {}",
            category,
            bar(view.category_completion(category), BAR_WIDTH / 2)
        );
    }
    println!();
    println!("Showing: {}", view.selected_category());
    for step in view.visible() {
        println!("{}", step_line(step));
    }
}

fn item_lines(item: &ProgressItem) -> Vec<String> {
    let mut lines = vec![format!(
        "{} [{}] {} ({} priority)  {}",
        item.id,
        item.status,
        item.title,
        item.priority,
        bar(item.subtask_completion(), BAR_WIDTH / 2)
    )];
    for (i, subtask) in item.subtasks.iter().enumerate() {
        lines.push(format!("    {} {}. {}", checkbox(subtask.completed), i + 1, subtask.task));
    }
    if !item.notes.is_empty() {
        lines.push(format!("    note: {}", item.notes));
    }
    lines
}

pub fn progress<'a>(view: &ProgressView, items: impl IntoIterator<Item = &'a ProgressItem>) {
    let completion = view.completion();
    let counts = view.status_counts();
    println!(
        "Step {} of {}  {}",
        completion.current_step(),
        completion.total,
        bar(completion, BAR_WIDTH)
    );
    println!(
        "not started {} | in progress {} | completed {} | blocked {}",
        counts.not_started, counts.in_progress, counts.completed, counts.blocked
    );
    println!("Subtasks {}", bar(view.subtask_completion(), BAR_WIDTH));
    println!();
    for item in items {
        for line in item_lines(item) {
            println!("{}", line);
        }
    }
}

fn job_line(job: &JobListing) -> String {
    format!(
        "{}  {} at {}, {}  {} [{}{}]",
        job.id,
        job.title,
        job.company,
        job.location,
        job.salary,
        job.job_type,
        if job.remote_work { ", remote" } else { "" }
    )
}

pub fn jobs<'a>(view: &JobsView, jobs: impl IntoIterator<Item = &'a JobListing>) {
    println!("Categories: {}", view.categories().join(", "));
    println!("Job types:  {}", view.job_types().join(", "));
    println!();
    let mut shown = 0;
    for job in jobs {
        println!("{}", job_line(job));
        shown += 1;
    }
    println!();
    println!("{} of {} jobs", shown, view.jobs().len());
}

pub fn opportunities(view: &JobsView) {
    for sector in view.sectors() {
        println!(
            "{:<12} demand {}, {}{}",
            sector.sector,
            sector.demand,
            sector.salary_range,
            if sector.sponsorship { ", sponsors visas" } else { "" }
        );
        println!("    employers: {}", sector.major_employers.join(", "));
        if !sector.notes.is_empty() {
            println!("    {}", sector.notes);
        }
    }
}

fn market_lines(market: &HousingMarket) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({}): rent {}, price {}",
        market.location_id, market.currency, market.average_rent, market.average_price
    )];
    if !market.property_types.is_empty() {
        lines.push(format!("  types: {}", market.property_types.join(", ")));
    }
    for area in &market.areas {
        lines.push(format!(
            "  {:<12} rent {}, price {}, {}",
            area.name, area.average_rent, area.average_price, area.commute
        ));
    }
    for tip in &market.tips {
        lines.push(format!("  tip: {}", tip));
    }
    lines
}

pub fn housing(view: &HousingView) {
    for market in [view.origin(), view.destination()].into_iter().flatten() {
        for line in market_lines(market) {
            println!("{}", line);
        }
        println!();
    }
}

fn profile(location: &LocationProfile) {
    println!("{}, {} ({})", location.name, location.region, location.country);
    println!("  population  {}", location.population);
    println!("  climate     {}", location.climate);
    println!("  cost        {}", location.cost_of_living);
    for highlight in &location.highlights {
        println!("  - {}", highlight);
    }
}

pub fn locations(view: &LocationsView) {
    for location in [view.origin(), view.destination()].into_iter().flatten() {
        profile(location);
        println!();
    }
    if let Some(comparison) = view.comparison() {
        println!("{} vs {}", comparison.origin, comparison.destination);
        for point in &comparison.points {
            println!("  {:<20} {}  ->  {}", point.aspect, point.origin, point.destination);
            if let Some(note) = &point.note {
                println!("  {:<20} {}", "", note);
            }
        }
    }
}

pub fn visa_list(view: &VisaView) {
    for visa in view.visa_types() {
        println!(
            "{:<16} {}  fee {}, {}",
            visa.slug(),
            visa.visa_type,
            visa.fee,
            visa.processing_time
        );
    }
}

pub fn visa_details(view: &VisaView) {
    let Some(visa) = view.selected() else {
        println!("No visa types available");
        return;
    };

    println!("{}  (fee {}, {})", visa.visa_type, visa.fee, visa.processing_time);
    println!();
    println!("Requirements:");
    for requirement in &visa.requirements {
        println!("  - {}", requirement);
    }
    println!("Application process:");
    for (i, step) in visa.application_process.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
    println!("Documents {}", bar(view.document_completion(), BAR_WIDTH));
    for (category, docs) in &visa.required_documents {
        println!("  {}", category);
        for (i, doc) in docs.iter().enumerate() {
            println!("    {} {}", checkbox(view.is_checked(category, i)), doc);
        }
    }
}

pub fn resources(view: &ResourcesView) {
    for (category, links) in view.by_category() {
        println!("{}", category);
        for link in links {
            println!("  {}  {}", link.name, link.url);
            println!("      {}", link.description);
        }
    }
}

pub fn logistics(view: &LogisticsView) {
    for (category, providers) in view.by_category() {
        println!("{}", category);
        for provider in providers {
            let cost = provider.estimated_cost.as_deref().unwrap_or("ask for a quote");
            println!("  {}  {}  ({})", provider.name, provider.website, cost);
            if let Some(phone) = &provider.phone {
                println!("      tel {}", phone);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        let half = Completion { completed: 5, total: 10 };
        assert_eq!(bar(half, 10), "[#####.....] 5/10 (50%)");
    }

    #[test]
    fn empty_bar_does_not_divide_by_zero() {
        assert_eq!(bar(Completion::default(), 4), "[....] 0/0 (0%)");
    }

    #[test]
    fn market_lists_every_area() {
        let market = HousingMarket {
            location_id: "peak-district".to_string(),
            currency: "GBP".to_string(),
            average_rent: "£950".to_string(),
            average_price: "£325,000".to_string(),
            property_types: vec![],
            areas: vec![relocate_types::HousingArea {
                name: "Buxton".to_string(),
                description: String::new(),
                average_rent: "£850".to_string(),
                average_price: "£260,000".to_string(),
                commute: "60 minutes".to_string(),
            }],
            tips: vec!["Ask about broadband".to_string()],
        };
        let lines = market_lines(&market);
        assert_eq!(lines[0], "peak-district (GBP): rent £950, price £325,000");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  Buxton"));
        assert_eq!(lines[2], "  tip: Ask about broadband");
    }

    #[test]
    fn checkbox_marks() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
