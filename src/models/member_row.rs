/// Row view handed to the roster page template.
pub struct MemberRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub selected: bool,
    pub editing: bool,
}
