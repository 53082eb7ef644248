//! `folio icon <name>` – show the icon tag a name maps to.

use folio_core::icon::IconTag;

pub fn run_icon(name: &str) {
    let tag = IconTag::from_name(Some(name));
    if tag == IconTag::FALLBACK {
        println!("{} (fallback)", tag);
    } else {
        println!("{}", tag);
    }
}
