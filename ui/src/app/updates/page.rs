use crate::app::model::Model;
use crate::components::common::{Msg, PageActivityMsg};
use crate::error::AppResult;
use crate::pages::{DashboardPage, Page, PositionsPage};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_page(&mut self, msg: PageActivityMsg) -> Option<Msg> {
        let result = match msg {
            PageActivityMsg::TimeframeSelected(timeframe) => {
                if self.page_state.timeframe == timeframe {
                    return None;
                }
                self.page_state.timeframe = timeframe;
                if self.page != Page::Dashboard {
                    return None;
                }
                DashboardPage::remount_chart(
                    &mut self.app,
                    &self.page_state,
                    self.display,
                    &self.error_reporter,
                )
            }
            PageActivityMsg::PositionsTabSelected(filter) => {
                self.page_state.positions_filter = filter;
                self.remount_positions_table()
            }
            PageActivityMsg::SearchChanged(query) => {
                self.page_state.search = query;
                self.remount_positions_table()
            }
        };

        result.err().map(Msg::Error)
    }

    fn remount_positions_table(&mut self) -> AppResult<()> {
        if self.page != Page::Positions {
            return Ok(());
        }
        PositionsPage::remount_table(&mut self.app, &self.page_state, self.display)
    }
}
