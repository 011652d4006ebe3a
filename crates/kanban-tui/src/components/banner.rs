use crate::theme::error_text;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Transient error notice drawn over the top of the board.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub created_at: Instant,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // +4 for border chars and padding
        let box_width = (self.message.chars().count() + 4).min(area.width as usize) as u16;
        let banner_area = Rect {
            x: area.x + area.width.saturating_sub(box_width) / 2,
            y: area.y,
            width: box_width,
            height: 3.min(area.height),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(error_text());

        let widget = Paragraph::new(self.message.as_str())
            .style(error_text())
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(Clear, banner_area);
        frame.render_widget(widget, banner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_banner_is_not_expired() {
        let banner = Banner::error("Could not move task");
        assert!(!banner.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_zero_ttl_expires() {
        let banner = Banner::error("Could not move task");
        std::thread::sleep(Duration::from_millis(2));
        assert!(banner.is_expired(Duration::ZERO));
    }
}
