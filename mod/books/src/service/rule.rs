use crate::model::GroupingRule;
use crate::service::{BooksError, BooksService};

#[derive(serde::Deserialize)]
struct RuleList {
    items: Vec<GroupingRule>,
}

impl BooksService {
    /// List the grouping rules, in the server's application order.
    pub async fn list_grouping_rules(&self) -> Result<Vec<GroupingRule>, BooksError> {
        let list: RuleList = self.api.get_json("/ledger/grouping-rules").await?;
        Ok(list.items)
    }
}
