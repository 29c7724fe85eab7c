//! UI module for rendering the TUI

mod components;
mod drawer;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::FormExample => forms::draw(frame, main_area, app),
        View::DrawerDemo => drawer::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
}
