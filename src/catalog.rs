//! Fixed LabFlow links: the Airtable forms and dashboard, plus the shell's
//! home-screen content.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKey {
    ClipboardList,
    BoxSeam,
    Flask,
    ShoppingCart,
}

impl IconKey {
    /// Single-glyph stand-in for the icon in a terminal.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::ClipboardList => "📋",
            Self::BoxSeam => "📦",
            Self::Flask => "⚗",
            Self::ShoppingCart => "🛒",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLink {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: IconKey,
    pub description: &'static str,
}

pub const FORM_LINKS: &[FormLink] = &[
    FormLink {
        title: "Usage Log",
        url: "https://airtable.com/appyhbedlTyTgOBCB/pag4ygzHonoUgo1ez/form",
        icon: IconKey::ClipboardList,
        description: "Log item usage in the lab",
    },
    FormLink {
        title: "Item Receipt",
        url: "https://airtable.com/appyhbedlTyTgOBCB/pagbiDDluZm2ww1hD/form",
        icon: IconKey::BoxSeam,
        description: "Record new inventory items",
    },
    FormLink {
        title: "Preparation Log",
        url: "https://airtable.com/appyhbedlTyTgOBCB/pag0Gd5dq5g1xrijH/form",
        icon: IconKey::Flask,
        description: "Document preparation activities",
    },
    FormLink {
        title: "Order Request",
        url: "https://airtable.com/appyhbedlTyTgOBCB/pagD8bWjDLCeoVjpX/form",
        icon: IconKey::ShoppingCart,
        description: "Request new supplies",
    },
];

pub const DASHBOARD_URL: &str = "https://airtable.com/appyhbedlTyTgOBCB";

/// Home-screen quick actions. Same forms, shorter Indonesian blurbs.
pub const ACTION_CARDS: &[FormLink] = &[
    FormLink {
        title: "Item Receipt",
        url: "https://airtable.com/appyhbedlTyTgOBCB/pagbiDDluZm2ww1hD/form",
        icon: IconKey::BoxSeam,
        description: "Input penerimaan barang baru ke inventory",
    },
    FormLink {
        title: "Usage Log",
        url: "https://airtable.com/appyhbedlTyTgOBCB/pag4ygzHonoUgo1ez/form",
        icon: IconKey::ClipboardList,
        description: "Catat penggunaan bahan kimia/alat",
    },
    FormLink {
        title: "Prep Log",
        url: "https://airtable.com/appyhbedlTyTgOBCB/pag0Gd5dq5g1xrijH/form",
        icon: IconKey::Flask,
        description: "Form log persiapan larutan/sampel",
    },
    FormLink {
        title: "Request Order",
        url: "https://airtable.com/appyhbedlTyTgOBCB/pagD8bWjDLCeoVjpX/form",
        icon: IconKey::ShoppingCart,
        description: "Buat permintaan pembelian baru",
    },
];

/// Example prompts cycled through as input hints.
pub const PLACEHOLDERS: &[&str] = &[
    "Tolong update Status Order ORD-XXX-001 menjadi Pending",
    "Bagaimana penanganan pertama jika aseton terkena mata?",
    "Apa klasifikasi bahaya aseton menurut regulasi EC No 1272/2008",
    "Tolong list apa saja reagen dan consumable yang stoknya menipis?",
    "Berapa hari lagi aseton akan expired? Sisa berapa Stok?",
];

pub fn placeholder(index: usize) -> &'static str {
    PLACEHOLDERS[index % PLACEHOLDERS.len()]
}
