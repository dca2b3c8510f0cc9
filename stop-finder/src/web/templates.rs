//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::StopInfo;

/// Home page with the place name form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Shown above the form, e.g. after an empty submission.
    pub message: Option<String>,
}

/// Nearest stop result page.
#[derive(Template)]
#[template(path = "station.html")]
pub struct StationTemplate {
    pub place_name: String,
    pub station_name: String,
    pub wheelchair_accessible: bool,
}

impl StationTemplate {
    pub fn new(place_name: impl Into<String>, stop: StopInfo) -> Self {
        Self {
            place_name: place_name.into(),
            station_name: stop.station_name,
            wheelchair_accessible: stop.wheelchair_accessible,
        }
    }
}

/// Generic error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

impl Default for ErrorTemplate {
    fn default() -> Self {
        Self {
            title: "Something went wrong".to_string(),
            message: "We couldn't find a stop near that place. Check the spelling or try a more specific landmark.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WheelchairBoarding;

    #[test]
    fn station_page_shows_stop() {
        let template = StationTemplate::new(
            "Fenway Park",
            StopInfo::new("Kenmore", WheelchairBoarding::Accessible),
        );
        let html = template.render().unwrap();

        assert!(html.contains("Fenway Park"));
        assert!(html.contains("Kenmore"));
        assert!(html.contains("is wheelchair accessible"));
    }

    #[test]
    fn station_page_inaccessible() {
        let template = StationTemplate::new(
            "Northeastern",
            StopInfo::new("Ruggles", WheelchairBoarding::Inaccessible),
        );
        let html = template.render().unwrap();

        assert!(html.contains("Ruggles"));
        assert!(html.contains("is not wheelchair accessible"));
    }

    #[test]
    fn place_name_is_escaped() {
        let template = StationTemplate::new(
            "<script>alert(1)</script>",
            StopInfo::new("Kenmore", WheelchairBoarding::Accessible),
        );
        let html = template.render().unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn index_message_optional() {
        let html = IndexTemplate { message: None }.render().unwrap();
        assert!(html.contains("<form"));

        let html = IndexTemplate {
            message: Some("Please enter a place name.".to_string()),
        }
        .render()
        .unwrap();
        assert!(html.contains("Please enter a place name."));
    }

    #[test]
    fn error_page_renders() {
        let html = ErrorTemplate::default().render().unwrap();
        assert!(html.contains("Something went wrong"));
    }
}
