//! Route paths for the entries resource, shared by redirects and views.

pub fn entries_path() -> String {
    "/entries".to_string()
}

pub fn new_entry_path() -> String {
    "/entries/new".to_string()
}

pub fn entry_path(id: i32) -> String {
    format!("/entries/{}", id)
}

pub fn edit_entry_path(id: i32) -> String {
    format!("/entries/{}/edit", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_paths_embed_the_id() {
        assert_eq!(entry_path(12), "/entries/12");
        assert_eq!(edit_entry_path(12), "/entries/12/edit");
    }
}
