use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::catalog::paging::PageWindow;
use crate::catalog::types::{FaqRecord, Stats};

pub fn format_record_list(window: &PageWindow<'_, &FaqRecord>, page: usize, total: usize) -> String {
    if window.items.is_empty() {
        if total == 0 {
            return "No records match the current filters".to_string();
        }
        // Matches exist but the requested page is past them
        return format!(
            "Page {} is beyond the last page ({} matching records on {} pages)",
            page, total, window.total_pages
        );
    }

    let mut output = String::new();

    // Header
    output.push_str(
        &format!(
            "{:<8} {:<26} {:<8} {:<44} {:<22} {}\n",
            "PF #", "ID", "Status", "Title", "System", "Created"
        )
        .bold()
        .to_string(),
    );
    output.push_str(&"─".repeat(120));
    output.push('\n');

    for record in window.items {
        let status = if record.needs_review {
            "review".red().to_string()
        } else {
            "ok".green().to_string()
        };

        let title = truncate_column(&record.title, 42);
        let system = truncate_column(&record.system, 20);
        let id = truncate_column(&record.id, 24);

        output.push_str(&format!(
            "{:<8} {:<26} {:<17} {:<44} {:<22} {}\n",
            record.reference_number.bold(),
            id.bright_black(),
            status,
            title,
            system,
            format_relative_time(record.created_at)
        ));
    }

    output.push_str(&format!(
        "\nPage {} of {} ({} matching records)\n",
        page, window.total_pages, total
    ));

    output
}

pub fn format_record_detail(record: &FaqRecord) -> String {
    let mut output = String::new();

    output.push_str(&"━".repeat(60));
    output.push('\n');
    output.push_str(&format!("PF {}  ", record.reference_number).blue().bold().to_string());
    output.push_str(&record.title.bold().to_string());
    output.push('\n');
    output.push_str(&record.id.bright_black().to_string());
    output.push('\n');

    if record.needs_review {
        output.push_str(&"needs review".red().bold().to_string());
    } else {
        output.push_str(&"up to date".green().to_string());
    }
    output.push('\n');

    let mut tags = vec![
        record.system.as_str(),
        record.category.as_str(),
        record.record_type.as_str(),
    ];
    tags.retain(|t| !t.is_empty());
    if !tags.is_empty() {
        output.push_str(&tags.join(" · ").cyan().to_string());
        output.push('\n');
    }

    let mut flags = Vec::new();
    if record.is_favorite {
        flags.push("favorite");
    }
    if record.is_reusable {
        flags.push("reusable");
    }
    if record.has_video {
        flags.push("video");
    }
    if !flags.is_empty() {
        output.push_str(&flags.join(", ").yellow().to_string());
        output.push('\n');
    }

    if !record.url.is_empty() {
        output.push_str(&record.url.bright_black().to_string());
        output.push('\n');
    }

    if !record.summary.is_empty() {
        output.push('\n');
        output.push_str(&"Summary".bold().to_string());
        output.push('\n');
        output.push_str(&record.summary);
        output.push('\n');
    }

    if !record.private_notes.is_empty() {
        output.push('\n');
        output.push_str(&"Notes".bold().to_string());
        output.push('\n');
        output.push_str(&record.private_notes);
        output.push('\n');
    }

    if !record.history.is_empty() {
        output.push('\n');
        output.push_str(&"History".bold().to_string());
        output.push('\n');
        for entry in &record.history {
            output.push_str(&format!(
                "  {}  {}\n",
                format_timestamp(entry.timestamp).bright_black(),
                entry.action
            ));
        }
    }

    output
}

pub fn format_stats(stats: &Stats) -> String {
    let mut output = String::new();

    output.push_str(&"Knowledge Base Statistics".bold().to_string());
    output.push('\n');
    output.push_str(&format!("Total Records: {}", stats.total));
    output.push('\n');
    output.push_str(&format!("Needs Review: {}", stats.needs_review_count));
    output.push('\n');
    output.push_str(&format!("Up To Date: {}", stats.up_to_date_count));
    output.push('\n');
    output.push_str(&format!("Reusable: {}", stats.reusable_count));
    output.push('\n');
    output.push_str(&format!("With Video: {}", stats.has_video_count));
    output.push('\n');

    let health_pct = (stats.health_ratio * 100.0).round() as u32;
    let health = format!("Health: {}%", health_pct);
    if stats.health_ratio > 0.8 {
        output.push_str(&health.green().to_string());
    } else {
        output.push_str(&health.yellow().to_string());
    }
    output.push('\n');

    if !stats.top_systems.is_empty() {
        output.push('\n');
        output.push_str(&"Top Systems".bold().to_string());
        output.push('\n');
        for (rank, (system, count)) in stats.top_systems.iter().enumerate() {
            output.push_str(&format!("  {}. {:<32} {}\n", rank + 1, system, count));
        }
    }

    if !stats.by_category.is_empty() {
        output.push('\n');
        output.push_str(&"By Category".bold().to_string());
        output.push('\n');
        for (category, count) in &stats.by_category {
            output.push_str(&format!("  {:<32} {}\n", category, count));
        }
    }

    if !stats.most_recent.is_empty() {
        output.push('\n');
        output.push_str(&"Recent Activity".bold().to_string());
        output.push('\n');
        for record in &stats.most_recent {
            output.push_str(&format!(
                "  #{:<6} {:<44} {}\n",
                record.reference_number,
                truncate_column(&record.title, 42),
                format_relative_time(record.created_at).bright_black()
            ));
        }
    }

    output
}

fn format_relative_time(millis: i64) -> String {
    let Some(dt) = DateTime::from_timestamp_millis(millis) else {
        return "unknown".to_string();
    };
    let duration = Utc::now().signed_duration_since(dt);

    if duration.num_days() > 0 {
        format!("{} days ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{} hours ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{} minutes ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn truncate_column(input: &str, max_chars: usize) -> String {
    if input.chars().count() > max_chars {
        format!("{}...", input.chars().take(max_chars - 3).collect::<String>())
    } else {
        input.to_string()
    }
}
