use anyhow::Result;

use kidari::CheckPolicy;

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

pub fn cmd_explain(brief: bool, policy: CheckPolicy, ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit_event(&StartEvent::new("explain").with_policy(policy))?;
        let data = crate::ui::views::explain::explain_json(policy);
        crate::ui::json::emit_event(&DataEvent::new("explain", data).brief(brief))?;
        crate::ui::json::emit_event(&CompleteEvent::success("explain"))?;
        return Ok(());
    }

    print!(
        "{}",
        crate::ui::views::explain::render_explain(policy, brief, ui.verbose, ui.color, ui.unicode)
    );
    Ok(())
}
