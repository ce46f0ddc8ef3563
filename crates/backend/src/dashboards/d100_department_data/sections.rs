//! Dataset sections shown on every department page.

use contracts::shared::tabular::SummarySpec;

#[derive(Debug, Clone, Copy)]
pub enum SummaryDef {
    /// Row count
    Count(&'static str),
    /// (label, field)
    Sum(&'static str, &'static str),
    /// (label, field, value)
    CountWhere(&'static str, &'static str, &'static str),
}

impl SummaryDef {
    pub fn to_spec(self) -> SummarySpec {
        match self {
            SummaryDef::Count(label) => SummarySpec::count(label),
            SummaryDef::Sum(label, field) => SummarySpec::sum(label, field),
            SummaryDef::CountWhere(label, field, equals) => {
                SummarySpec::count_where(label, field, equals)
            }
        }
    }
}

#[derive(Debug)]
pub struct SectionDef {
    pub key: &'static str,
    pub title: &'static str,
    /// Source table; only names from this registry ever reach SQL
    pub table: &'static str,
    pub order_by: &'static str,
    pub status_field: Option<&'static str>,
    pub summaries: &'static [SummaryDef],
}

impl SectionDef {
    pub fn summary_specs(&self) -> Vec<SummarySpec> {
        self.summaries.iter().map(|s| s.to_spec()).collect()
    }
}

pub const SECTIONS: &[SectionDef] = &[
    SectionDef {
        key: "stock",
        title: "Stock Inventory",
        table: "stock_items",
        order_by: "serial_no",
        status_field: Some("status"),
        summaries: &[
            SummaryDef::Count("Items"),
            SummaryDef::Sum("Total Quantity", "quantity"),
        ],
    },
    SectionDef {
        key: "vacancies",
        title: "Staff Vacancies",
        table: "staff_vacancies",
        order_by: "serial_no",
        status_field: None,
        summaries: &[
            SummaryDef::Sum("Sanctioned", "sanctioned"),
            SummaryDef::Sum("Filled", "filled"),
            SummaryDef::Sum("Vacant", "vacant"),
        ],
    },
    SectionDef {
        key: "lab_equipment",
        title: "Lab Equipment",
        table: "lab_equipment",
        order_by: "serial_no",
        status_field: Some("status"),
        summaries: &[
            SummaryDef::Count("Equipment"),
            SummaryDef::CountWhere("Functional", "status", "Functional"),
            SummaryDef::CountWhere("Non-Functional", "status", "Non-Functional"),
        ],
    },
    SectionDef {
        key: "land",
        title: "Land Resources",
        table: "land_resources",
        // no ordering field: the table gets a row number column
        order_by: "id",
        status_field: None,
        summaries: &[SummaryDef::Sum("Total Area (Acres)", "area_acres")],
    },
];

pub fn find_section(key: &str) -> Option<&'static SectionDef> {
    SECTIONS.iter().find(|s| s.key == key)
}
