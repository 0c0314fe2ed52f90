use crate::config::PageConfig;

/// Render the useEffect fetch block for a page.
///
/// This is the block the page table describes: destructure the responses
/// from a Promise.all over the configured fetch calls, then run the
/// state-setter statements. The fetch and state lines come pre-indented
/// from the config and are joined as-is.
///
/// Note the renderer's output is never inserted into the target file —
/// patching stops at the import line. The block is rendered here so the
/// eventual insertion step has a single source for it.
#[allow(dead_code)] // Not yet wired into patch_file; insertion is still manual
pub fn render_fetch_effect(page: &PageConfig) -> String {
    let api_calls = page.apis.join(", ");
    let fetch_calls = page.fetches.join("\n");
    let set_states = page.states.join("\n");

    format!(
        "
  // Fetch data from APIs
  useEffect(() => {{
    async function fetchData() {{
      try {{
        const [{api_calls}] = await Promise.all([
{fetch_calls}
        ]);

{set_states}
      }} catch (error) {{
        console.error('Error fetching data:', error);
        showToast('Failed to load data', 'error');
      }} finally {{
        setLoading(false);
      }}
    }}
    fetchData();
  }}, []);
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar_page() -> PageConfig {
        PageConfig {
            path: "src/app/admin/calendar/page.tsx".into(),
            apis: vec![
                "visitsRes".to_string(),
                "empRes".to_string(),
                "compRes".to_string(),
            ],
            fetches: vec![
                "          fetch('/api/visits'),".to_string(),
                "          fetch('/api/employees'),".to_string(),
                "          fetch('/api/companies'),".to_string(),
            ],
            states: vec![
                "        if (visitsRes.ok) setVisits(await visitsRes.json());".to_string(),
                "        if (compRes.ok) setCompanies(await compRes.json());".to_string(),
            ],
            state_vars: vec![],
        }
    }

    #[test]
    fn test_api_names_joined_in_order() {
        let block = render_fetch_effect(&calendar_page());
        assert!(block.contains("const [visitsRes, empRes, compRes] = await Promise.all(["));
    }

    #[test]
    fn test_fetch_calls_rendered_verbatim() {
        let block = render_fetch_effect(&calendar_page());
        assert!(block.contains("          fetch('/api/visits'),\n"));
        assert!(block.contains("          fetch('/api/companies'),\n"));
    }

    #[test]
    fn test_state_setters_follow_fetches() {
        let block = render_fetch_effect(&calendar_page());
        let fetch_pos = block.find("fetch('/api/visits')").unwrap();
        let state_pos = block.find("setVisits(await visitsRes.json())").unwrap();
        assert!(fetch_pos < state_pos);
    }

    #[test]
    fn test_error_and_loading_scaffolding_present() {
        let block = render_fetch_effect(&calendar_page());
        assert!(block.contains("console.error('Error fetching data:', error);"));
        assert!(block.contains("showToast('Failed to load data', 'error');"));
        assert!(block.contains("setLoading(false);"));
        assert!(block.trim_end().ends_with("}, []);"));
    }
}
