//! HTML page construction. Pure string building: no validation or
//! persistence decisions happen here.
//!
//! Persisted records already hold display-safe text; raw form values and
//! query parameters are escaped at render time.

use crate::{
    models::{RawSubmission, Registration},
    pipeline::Stats,
    validate::{escape_html, CLUBS, INTERESTS},
};

fn page(title: &str, heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
</head>
<body>
<header><h1>{heading}</h1></header>
<main>
{body}
</main>
<footer><p>&copy; 2024 Student Club Registration System</p></footer>
</body>
</html>
"#
    )
}

/// The registration form, redisplaying prior input and any validation
/// errors. An empty error list renders the plain form.
pub fn form_page(errors: &[String], values: &RawSubmission) -> String {
    let mut body = String::new();

    if !errors.is_empty() {
        body.push_str("<div class=\"error-messages\">\n<h3>Please fix the following errors:</h3>\n<ul>\n");
        for error in errors {
            body.push_str(&format!("<li>{}</li>\n", escape_html(error)));
        }
        body.push_str("</ul>\n</div>\n");
    }

    body.push_str("<form method=\"post\" action=\"/register\">\n");

    body.push_str(&format!(
        "<div class=\"form-group\">\n<label for=\"name\">Name: *</label><br>\n\
         <input type=\"text\" id=\"name\" name=\"name\" value=\"{}\" required>\n</div>\n",
        escape_html(&values.name)
    ));

    body.push_str(&format!(
        "<div class=\"form-group\">\n<label for=\"email\">Email: *</label><br>\n\
         <input type=\"email\" id=\"email\" name=\"email\" value=\"{}\" required>\n</div>\n",
        escape_html(&values.email)
    ));

    body.push_str(&format!(
        "<div class=\"form-group\">\n<label for=\"phone\">Phone Number:</label><br>\n\
         <input type=\"tel\" id=\"phone\" name=\"phone\" value=\"{}\" placeholder=\"(123) 456-7890\">\n</div>\n",
        escape_html(&values.phone)
    ));

    body.push_str(
        "<div class=\"form-group\">\n<label for=\"club\">Select Club: *</label><br>\n\
         <select id=\"club\" name=\"club\" required>\n\
         <option value=\"\">-- Please choose a club --</option>\n",
    );
    for club in CLUBS {
        let selected = if values.club == club { " selected" } else { "" };
        body.push_str(&format!("<option value=\"{club}\"{selected}>{club}</option>\n"));
    }
    body.push_str("</select>\n</div>\n");

    body.push_str(
        "<div class=\"form-group\">\n<label>Interests (select all that apply):</label><br>\n\
         <div class=\"checkbox-group\">\n",
    );
    for interest in INTERESTS {
        let checked = if values.interests.iter().any(|i| i == interest) {
            " checked"
        } else {
            ""
        };
        let id = format!("interest-{}", interest.to_lowercase());
        body.push_str(&format!(
            "<div class=\"checkbox-item\">\n\
             <input type=\"checkbox\" id=\"{id}\" name=\"interests[]\" value=\"{interest}\"{checked}>\n\
             <label for=\"{id}\">{interest}</label>\n</div>\n"
        ));
    }
    body.push_str("</div>\n</div>\n");

    body.push_str(&format!(
        "<div class=\"form-group\">\n\
         <label for=\"experience\">Previous Experience (optional):</label><br>\n\
         <textarea id=\"experience\" name=\"experience\" \
         placeholder=\"Tell us about any relevant experience you have...\">{}</textarea>\n</div>\n",
        escape_html(&values.experience)
    ));

    body.push_str("<input type=\"submit\" name=\"submit\" value=\"Register\">\n</form>\n");

    page("Club Registration Form", "Student Club Registration", &body)
}

/// The post-submit confirmation: the new registration's details plus the
/// merged recent-registrations list, newest first.
pub fn success_page(record: &Registration, all: &[Registration]) -> String {
    let mut body = String::new();

    body.push_str(
        "<div class=\"success-container\">\n<h2>Thank you for registering!</h2>\n\
         <div class=\"registration-details\">\n<h3>Your Registration Details:</h3>\n",
    );
    body.push_str(&format!("<p><strong>Name:</strong> {}</p>\n", record.name));
    body.push_str(&format!("<p><strong>Email:</strong> {}</p>\n", record.email));
    body.push_str(&format!("<p><strong>Club:</strong> {}</p>\n", record.club));
    if !record.phone.is_empty() {
        body.push_str(&format!("<p><strong>Phone:</strong> {}</p>\n", record.phone));
    }
    if !record.interests.is_empty() {
        body.push_str(&format!(
            "<p><strong>Interests:</strong> {}</p>\n",
            record.interests.join(", ")
        ));
    }
    if !record.experience.is_empty() {
        body.push_str(&format!(
            "<p><strong>Experience:</strong> {}</p>\n",
            record.experience
        ));
    }
    body.push_str(&format!(
        "<p><strong>Registration Time:</strong> {}</p>\n</div>\n</div>\n",
        record.timestamp
    ));

    body.push_str(&format!(
        "<div class=\"registrations-list\">\n<h3>All Registrations ({} total)</h3>\n",
        all.len()
    ));
    for reg in all {
        body.push_str(&format!(
            "<div class=\"registration-item\"><strong>{}</strong> - {}\
             <br><small>{} | {}</small></div>\n",
            reg.name, reg.club, reg.email, reg.timestamp
        ));
    }
    body.push_str("</div>\n");

    body.push_str(
        "<p><a href=\"/register\">Register Another Student</a> \
         <a href=\"/registrations\">View All Registrations</a></p>\n",
    );

    page("Registration Successful", "Registration Successful!", &body)
}

/// The searchable listing: stats grid, filter form, and one card per
/// registration.
pub fn listing_page(
    records: &[Registration],
    stats: &Stats,
    clubs: &[String],
    search: &str,
    selected_club: &str,
) -> String {
    let mut body = String::new();

    body.push_str("<a href=\"/register\">&larr; Back to Registration Form</a>\n");

    body.push_str(&format!(
        "<div class=\"stats-section\">\n<h2>Registration Statistics</h2>\n\
         <div class=\"stats-grid\">\n\
         <div class=\"stat-item\"><div class=\"stat-number\">{}</div><div>Total Registrations</div></div>\n\
         <div class=\"stat-item\"><div class=\"stat-number\">{}</div><div>Active Clubs</div></div>\n\
         <div class=\"stat-item\"><div class=\"stat-number\">{}</div><div>Filtered Results</div></div>\n\
         </div>\n</div>\n",
        stats.total, stats.clubs, stats.shown
    ));

    body.push_str(&format!(
        "<div class=\"filters-section\">\n<form method=\"get\" action=\"/registrations\">\n\
         <label for=\"search\">Search:</label>\n\
         <input type=\"text\" id=\"search\" name=\"search\" \
         placeholder=\"Search by name, email, or club...\" value=\"{}\">\n",
        escape_html(search)
    ));
    body.push_str(
        "<label for=\"club\">Filter by Club:</label>\n<select id=\"club\" name=\"club\">\n\
         <option value=\"\">All Clubs</option>\n",
    );
    for club in clubs {
        let selected = if selected_club == club { " selected" } else { "" };
        body.push_str(&format!("<option value=\"{club}\"{selected}>{club}</option>\n"));
    }
    body.push_str(
        "</select>\n<button type=\"submit\">Apply Filters</button>\n\
         <a href=\"/registrations\">Clear All</a>\n</form>\n</div>\n",
    );

    if records.is_empty() {
        body.push_str("<div class=\"no-results\">\n<h3>No registrations found</h3>\n");
        if !search.is_empty() || !selected_club.is_empty() {
            body.push_str(
                "<p>Try adjusting your search criteria or \
                 <a href=\"/registrations\">clear all filters</a>.</p>\n",
            );
        } else {
            body.push_str(
                "<p>No students have registered yet. \
                 <a href=\"/register\">Be the first to register!</a></p>\n",
            );
        }
        body.push_str("</div>\n");
    } else {
        body.push_str("<div class=\"registrations-grid\">\n");
        for reg in records {
            body.push_str(&registration_card(reg));
        }
        body.push_str("</div>\n");
    }

    page("View All Registrations", "Student Club Registrations", &body)
}

fn registration_card(reg: &Registration) -> String {
    let mut card = String::new();

    card.push_str(&format!(
        "<div class=\"registration-card\">\n<div class=\"card-header\">\n\
         <h3 class=\"student-name\">{}</h3>\n<span class=\"club-badge\">{}</span>\n</div>\n\
         <div class=\"card-details\">\n<p><strong>Email:</strong> {}</p>\n",
        reg.name, reg.club, reg.email
    ));

    if !reg.phone.is_empty() {
        card.push_str(&format!("<p><strong>Phone:</strong> {}</p>\n", reg.phone));
    }

    if !reg.interests.is_empty() {
        card.push_str("<p><strong>Interests:</strong></p>\n<div class=\"interests-list\">\n");
        for interest in &reg.interests {
            card.push_str(&format!("<span class=\"interest-tag\">{interest}</span>\n"));
        }
        card.push_str("</div>\n");
    }

    if !reg.experience.is_empty() {
        card.push_str(&format!(
            "<p><strong>Experience:</strong></p>\n<p class=\"experience\">\"{}\"</p>\n",
            reg.experience
        ));
    }

    card.push_str(&format!(
        "<p class=\"timestamp\">Registered: {}</p>\n</div>\n</div>\n",
        reg.timestamp
    ));

    card
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, club: &str) -> Registration {
        Registration {
            id: "id".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            club: club.to_string(),
            phone: String::new(),
            interests: vec!["Art".to_string(), "Music".to_string()],
            experience: String::new(),
            timestamp: "2024-01-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn form_redisplays_escaped_input() {
        let values = RawSubmission {
            name: "<Al>".to_string(),
            club: "Art Club".to_string(),
            interests: vec!["Music".to_string()],
            ..RawSubmission::default()
        };

        let html = form_page(&["Email is required.".to_string()], &values);
        assert!(html.contains("value=\"&lt;Al&gt;\""));
        assert!(html.contains("<li>Email is required.</li>"));
        assert!(html.contains("<option value=\"Art Club\" selected>"));
        assert!(html.contains("value=\"Music\" checked"));
        assert!(!html.contains("value=\"Art\" checked"));
    }

    #[test]
    fn empty_form_has_no_error_block() {
        let html = form_page(&[], &RawSubmission::default());
        assert!(!html.contains("error-messages"));
        assert!(html.contains("<form method=\"post\" action=\"/register\">"));
    }

    #[test]
    fn success_shows_details_and_total() {
        let reg = record("Al", "al@x.com", "Art Club");
        let html = success_page(&reg, &[reg.clone()]);

        assert!(html.contains("Al"));
        assert!(html.contains("al@x.com"));
        assert!(html.contains("Art, Music"));
        assert!(html.contains("All Registrations (1 total)"));
    }

    #[test]
    fn listing_distinguishes_empty_states() {
        let stats = Stats { total: 0, clubs: 0, shown: 0 };

        let unfiltered = listing_page(&[], &stats, &[], "", "");
        assert!(unfiltered.contains("No students have registered yet."));

        let filtered = listing_page(&[], &stats, &[], "jane", "");
        assert!(filtered.contains("Try adjusting your search criteria"));
    }

    #[test]
    fn listing_shows_stats_and_cards() {
        let regs = vec![record("Al", "al@x.com", "Art Club")];
        let stats = Stats { total: 1, clubs: 1, shown: 1 };
        let clubs = vec!["Art Club".to_string()];

        let html = listing_page(&regs, &stats, &clubs, "", "Art Club");
        assert!(html.contains("Total Registrations"));
        assert!(html.contains("<option value=\"Art Club\" selected>"));
        assert!(html.contains("club-badge"));
    }
}
