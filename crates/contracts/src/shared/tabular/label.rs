/// Turns a machine field name into a column header.
///
/// `building_rooms` → `Building Rooms`, `some_id` → `Some ID`,
/// `roll_no_range` → `Roll No. Range`.
///
/// The acronym pass is a plain substring replace: any `Id` in the title-cased
/// text becomes `ID`, even inside a word (`identity` → `IDentity`).
pub fn format_label(field_name: &str) -> String {
    let spaced = field_name.replace('_', " ");

    let mut titled = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            titled.push(c);
        } else if at_word_start {
            at_word_start = false;
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
    }

    titled.replace("Id", "ID").replace("No ", "No. ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_label_title_case() {
        assert_eq!(format_label("building_rooms"), "Building Rooms");
        assert_eq!(format_label("equipment_name"), "Equipment Name");
        assert_eq!(format_label("status"), "Status");
    }

    #[test]
    fn test_format_label_acronyms() {
        assert_eq!(format_label("some_id"), "Some ID");
        assert_eq!(format_label("department_id"), "Department ID");
        assert_eq!(format_label("roll_no_range"), "Roll No. Range");
        // no trailing space, so no period
        assert_eq!(format_label("serial_no"), "Serial No");
    }

    #[test]
    fn test_format_label_id_replace_is_substring() {
        assert_eq!(format_label("identity_card"), "IDentity Card");
        assert_eq!(format_label("ParentId"), "ParentID");
        // lowercase "id" inside a word is left alone
        assert_eq!(format_label("valid_from"), "Valid From");
    }

    #[test]
    fn test_format_label_keeps_rest_of_word() {
        assert_eq!(format_label("BPS_grade"), "BPS Grade");
        assert_eq!(format_label("area_in_acres"), "Area In Acres");
    }

    #[test]
    fn test_format_label_degenerate_input() {
        assert_eq!(format_label(""), "");
        assert_eq!(format_label("__"), "  ");
        assert_eq!(format_label("a__b"), "A  B");
    }
}
