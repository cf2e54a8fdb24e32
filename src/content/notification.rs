//! Notification email sent to the studio inbox.

use super::{escape_html, EmailDocument};
use crate::models::submission::non_blank;
use crate::models::ContactSubmission;
use chrono::{DateTime, Utc};

/// The internal notification rendered from an accepted submission.
///
/// Shows every submitted field (optional ones only when present), the
/// budget-band marker, and the received-at timestamp.
pub struct NotificationEmail<'a> {
    pub submission: &'a ContactSubmission,
    pub received_at: DateTime<Utc>,
}

impl<'a> NotificationEmail<'a> {
    pub fn render(&self) -> EmailDocument {
        let name = self.submission.name.trim();
        let email = self.submission.email.trim();
        let band = self.submission.budget_band();
        let received = self.received_at.format("%Y-%m-%d %H:%M UTC");

        let subject = match non_blank(&self.submission.project_type) {
            Some(project_type) => format!("New inquiry from {} ({})", name, project_type),
            None => format!("New inquiry from {}", name),
        };

        let mut rows = String::new();
        rows.push_str(&field_row("Name", &escape_html(name)));
        rows.push_str(&field_row(
            "Email",
            &format!(
                r#"<a href="mailto:{0}">{0}</a>"#,
                escape_html(email)
            ),
        ));
        if let Some(phone) = non_blank(&self.submission.phone) {
            rows.push_str(&field_row("Phone", &escape_html(phone)));
        }
        if let Some(company) = non_blank(&self.submission.company) {
            rows.push_str(&field_row("Company", &escape_html(company)));
        }
        if let Some(budget) = non_blank(&self.submission.budget) {
            rows.push_str(&field_row("Budget", &escape_html(budget)));
        }
        if let Some(project_type) = non_blank(&self.submission.project_type) {
            rows.push_str(&field_row("Project type", &escape_html(project_type)));
        }

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body {{ font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #1f2937; margin: 0; padding: 0; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: #0e7490; color: white; padding: 24px 30px; border-radius: 10px 10px 0 0; }}
        .header h1 {{ margin: 0; font-size: 20px; }}
        .badge {{ display: inline-block; margin-top: 8px; padding: 2px 10px; border-radius: 10px; font-size: 12px; color: white; background-color: {band_color}; }}
        .content {{ padding: 24px 30px; background-color: #f8fafc; border: 1px solid #e2e8f0; border-top: none; }}
        .field {{ margin-bottom: 14px; }}
        .field-label {{ font-size: 11px; font-weight: 600; color: #64748b; text-transform: uppercase; letter-spacing: 0.5px; }}
        .field-value {{ font-size: 15px; color: #0f172a; }}
        .message-box {{ background: white; padding: 16px; border-radius: 8px; border: 1px solid #e2e8f0; margin-top: 16px; white-space: pre-wrap; }}
        .footer {{ padding: 16px; text-align: center; font-size: 12px; color: #94a3b8; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>New inquiry via meltemistudio.gr</h1>
            <span class="badge">{band_label}</span>
        </div>
        <div class="content">
            {rows}
            <div class="message-box">
                <div class="field-label">Message</div>
                <div class="field-value">{message}</div>
            </div>
        </div>
        <div class="footer">
            <p>Received {received} via the website contact form.</p>
        </div>
    </div>
</body>
</html>"#,
            band_color = band.color(),
            band_label = band.label(),
            rows = rows,
            message = escape_html(self.submission.message.trim()),
            received = received,
        );

        let mut text = String::new();
        text.push_str("New inquiry via meltemistudio.gr\n");
        text.push_str(&format!("Received: {}\n", received));
        text.push_str(&format!("Priority: {}\n\n", band.label()));
        text.push_str(&format!("Name: {}\n", name));
        text.push_str(&format!("Email: {}\n", email));
        if let Some(phone) = non_blank(&self.submission.phone) {
            text.push_str(&format!("Phone: {}\n", phone));
        }
        if let Some(company) = non_blank(&self.submission.company) {
            text.push_str(&format!("Company: {}\n", company));
        }
        if let Some(budget) = non_blank(&self.submission.budget) {
            text.push_str(&format!("Budget: {}\n", budget));
        }
        if let Some(project_type) = non_blank(&self.submission.project_type) {
            text.push_str(&format!("Project type: {}\n", project_type));
        }
        text.push_str(&format!("\nMessage:\n{}\n", self.submission.message.trim()));

        EmailDocument {
            subject,
            html,
            text,
        }
    }
}

fn field_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="field"><div class="field-label">{}</div><div class="field-value">{}</div></div>
            "#,
        label, value
    )
}
