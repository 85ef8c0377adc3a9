//! User-facing system messages in the supported languages.
//!
//! Unknown languages get the English text.

/// Keys of the fixed messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NotFound,
    NoResults,
    KnowledgeBaseUnavailable,
    SessionExpired,
    ChooseCategory,
    ChooseItem,
    Previous,
    Next,
    Back,
    View,
}

/// Localized text for `message`
pub fn text(message: Message, lang: &str) -> &'static str {
    match (message, lang) {
        (Message::NotFound, "fa") => "❌ اطلاعاتی برای این مورد یافت نشد.",
        (Message::NotFound, "it") => "❌ Nessuna informazione trovata per questo elemento.",
        (Message::NotFound, _) => "❌ No information found for this item.",

        (Message::NoResults, "fa") => "❌ نتیجه‌ای یافت نشد.",
        (Message::NoResults, "it") => "❌ Nessun risultato trovato.",
        (Message::NoResults, _) => "❌ No results found.",

        (Message::KnowledgeBaseUnavailable, "fa") => "❌ پایگاه داده دانش در دسترس نیست.",
        (Message::KnowledgeBaseUnavailable, "it") => {
            "❌ La base di conoscenza non è disponibile."
        }
        (Message::KnowledgeBaseUnavailable, _) => "❌ Knowledge base is not available.",

        (Message::SessionExpired, "fa") => "⌛ نتایج جستجو منقضی شده است. لطفاً دوباره جستجو کنید.",
        (Message::SessionExpired, "it") => "⌛ I risultati sono scaduti. Ripeti la ricerca.",
        (Message::SessionExpired, _) => "⌛ These results have expired. Please search again.",

        (Message::ChooseCategory, "fa") => "📚 یک دسته را انتخاب کنید:",
        (Message::ChooseCategory, "it") => "📚 Scegli una categoria:",
        (Message::ChooseCategory, _) => "📚 Choose a category:",

        (Message::ChooseItem, "fa") => "📄 یک مورد را انتخاب کنید:",
        (Message::ChooseItem, "it") => "📄 Scegli un argomento:",
        (Message::ChooseItem, _) => "📄 Choose a topic:",

        (Message::Previous, "fa") => "⬅️ قبلی",
        (Message::Previous, "it") => "⬅️ Precedente",
        (Message::Previous, _) => "⬅️ Previous",

        (Message::Next, "fa") => "بعدی ➡️",
        (Message::Next, "it") => "Successivo ➡️",
        (Message::Next, _) => "Next ➡️",

        (Message::Back, "fa") => "🔙 بازگشت",
        (Message::Back, "it") => "🔙 Indietro",
        (Message::Back, _) => "🔙 Back",

        (Message::View, "fa") => "📖 مشاهده",
        (Message::View, "it") => "📖 Apri",
        (Message::View, _) => "📖 View",
    }
}

/// "Page n of total" in `lang`
pub fn page_indicator(lang: &str, position: usize, total: usize) -> String {
    match lang {
        "fa" => format!("صفحه {position} از {total}"),
        "it" => format!("Pagina {position} di {total}"),
        _ => format!("Page {position} of {total}"),
    }
}
