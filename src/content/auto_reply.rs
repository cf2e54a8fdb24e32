//! Auto-reply email sent back to the submitter.

use super::{escape_html, EmailDocument};

/// Confirmation sent to the submitter once their inquiry is accepted.
pub struct AutoReplyEmail<'a> {
    pub name: &'a str,
}

impl<'a> AutoReplyEmail<'a> {
    pub fn render(&self) -> EmailDocument {
        let name = self.name.trim();
        let subject = "Thanks for reaching out to Meltemi Studio".to_string();

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
        .content {{ padding: 24px 30px; background-color: #f8fafc; border: 1px solid #e2e8f0; border-top: none; border-radius: 0 0 10px 10px; }}
        .footer {{ padding: 16px; text-align: center; font-size: 12px; color: #94a3b8; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>We received your message</h1>
        </div>
        <div class="content">
            <p>Hi {name},</p>
            <p>Thanks for getting in touch with Meltemi Studio. Your message has
            landed in our inbox and a member of the team will reply within one
            business day.</p>
            <p>If anything is urgent in the meantime, you can reach us directly
            at <a href="mailto:hello@meltemistudio.gr">hello@meltemistudio.gr</a>.</p>
            <p>The Meltemi Studio team</p>
        </div>
        <div class="footer">
            <p>Meltemi Studio, Athens</p>
        </div>
    </div>
</body>
</html>"#,
            name = escape_html(name),
        );

        let text = format!(
            "Hi {},\n\n\
             Thanks for getting in touch with Meltemi Studio. Your message has \
             landed in our inbox and a member of the team will reply within one \
             business day.\n\n\
             If anything is urgent in the meantime, you can reach us directly at \
             hello@meltemistudio.gr.\n\n\
             The Meltemi Studio team\n",
            name,
        );

        EmailDocument {
            subject,
            html,
            text,
        }
    }
}
