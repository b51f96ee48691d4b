//! Rendering of the per-provider detail message.

use crate::model::TrackingData;
use crate::track::render::escape_html;

/// Timestamp layout used for every step.
pub const STEP_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders the full timeline reported by one provider.
///
/// One line per step in the order the provider supplied them; the most recent
/// step is bold. A destination, when known, is stated in a trailing line.
pub fn render_detail(data: &TrackingData) -> String {
    let mut text = format!(
        "Detailed tracking for package <i>{}</i> provided by <b>{}</b>:\n",
        escape_html(&data.shipment_number),
        escape_html(&data.provider_name)
    );

    let last = data.tracking_steps.len().saturating_sub(1);
    for (i, step) in data.tracking_steps.iter().enumerate() {
        let mut line = format!(
            "{} {}",
            step.datetime.format(STEP_TIME_FORMAT),
            escape_html(&step.message)
        );
        if !step.location.is_empty() {
            line.push_str(" 📌 ");
            line.push_str(&escape_html(&step.location));
        }

        if i == last {
            text.push_str(&format!("<b>{}</b>\n", line));
        } else {
            text.push_str(&line);
            text.push('\n');
        }
    }

    if !data.destination.is_empty() {
        text.push_str("\nThe package is headed to ");
        text.push_str(&escape_html(&data.destination));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackingStep;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn last_step_is_bold_and_location_marked() {
        let data = TrackingData::new("PL123", "InPost").with_steps(vec![
            TrackingStep::new(at(10, 0), "left depot"),
            TrackingStep::new(at(12, 0), "arrived hub").at("CityX"),
        ]);

        assert_eq!(
            render_detail(&data),
            "Detailed tracking for package <i>PL123</i> provided by <b>InPost</b>:\n\
             2024-03-01 10:00 left depot\n\
             <b>2024-03-01 12:00 arrived hub 📌 CityX</b>\n"
        );
    }

    #[test]
    fn destination_trailer() {
        let data = TrackingData::new("PL123", "InPost")
            .with_steps(vec![TrackingStep::new(at(9, 5), "registered")])
            .with_destination("Kraków");

        let text = render_detail(&data);
        assert!(text.contains("<b>2024-03-01 09:05 registered</b>\n"));
        assert!(text.ends_with("\nThe package is headed to Kraków"));
    }

    #[test]
    fn no_steps_renders_header_only() {
        let data = TrackingData::new("PL123", "InPost");
        assert_eq!(
            render_detail(&data),
            "Detailed tracking for package <i>PL123</i> provided by <b>InPost</b>:\n"
        );
    }

    #[test]
    fn provider_text_is_escaped() {
        let data = TrackingData::new("<x>", "A&B")
            .with_steps(vec![TrackingStep::new(at(1, 2), "<script>")]);
        let text = render_detail(&data);
        assert!(text.contains("<i>&lt;x&gt;</i>"));
        assert!(text.contains("<b>A&amp;B</b>"));
        assert!(text.contains("&lt;script&gt;"));
    }
}
