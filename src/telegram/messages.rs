//! User-facing texts.
//!
//! Every message the bot sends lives here so the pipeline and handlers only
//! decide *which* text to show.

use teloxide::utils::html;

use crate::core::config;
use crate::core::utils::truncate_chars;
use crate::download::gate::SizeRejection;

pub const START: &str = "🎥 Привет! Я бот для скачивания видео из Instagram.\n\n\
📝 Просто отправь мне ссылку на пост/reels/story из Instagram, \
и я скачаю видео и отправлю его тебе.\n\n\
Поддерживаемые форматы:\n\
• instagram.com/p/...\n\
• instagram.com/reel/...\n\
• instagram.com/stories/...\n\n\
Просто отправь ссылку!";

pub const HELP: &str = "ℹ️ Как использовать бота:\n\n\
1. Найди видео в Instagram\n\
2. Скопируй ссылку на пост\n\
3. Отправь ссылку мне\n\
4. Жди, пока я скачаю и отправлю видео\n\n\
Примеры ссылок:\n\
• https://www.instagram.com/p/ABC123/\n\
• https://www.instagram.com/reel/XYZ789/";

pub const NOT_INSTAGRAM_URL: &str = "❌ Это не похоже на ссылку Instagram.\n\
Пожалуйста, отправьте корректную ссылку на пост, reels или story.\n\n\
Пример: https://www.instagram.com/p/ABC123/";

pub const DOWNLOADING: &str = "⏳ Начинаю скачивание видео...";

pub const UPLOADING: &str = "📤 Отправляю видео...";

pub const FILE_MISSING: &str = "❌ Ошибка: файл не найден после скачивания";

pub const PROCESSING_ERROR: &str = "😔 Произошла ошибка при обработке вашего запроса.\n\
Пожалуйста, попробуйте ещё раз или отправьте /help для справки.";

pub const CRITICAL_ERROR: &str = "😔 Произошла критическая ошибка при обработке вашего сообщения.\n\
Пожалуйста, попробуйте ещё раз.";

/// Engine failure: the verbatim reason followed by the usual suspects.
pub fn download_failed(reason: &str) -> String {
    format!(
        "❌ Ошибка при скачивании видео:\n{}\n\n\
         Возможные причины:\n\
         • Видео недоступно или удалено\n\
         • Аккаунт приватный\n\
         • Неверная ссылка\n\
         • Это фото, а не видео",
        reason
    )
}

pub fn too_large(rejection: &SizeRejection) -> String {
    format!(
        "❌ Файл слишком большой ({}).\nМаксимальный размер: {}",
        rejection.actual_display(),
        rejection.max_display()
    )
}

/// HTML caption: truncated title plus a link back to the post.
pub fn video_caption(title: &str, url: &str) -> String {
    let title = truncate_chars(title, config::validation::MAX_CAPTION_TITLE_CHARS);
    format!(
        "🎬 {}\n\n<a href=\"{}\">Оригинал</a>",
        html::escape(title),
        escape_attribute(url)
    )
}

/// `html::escape` leaves quotes alone, which is not enough inside `href="..."`.
fn escape_attribute(value: &str) -> String {
    html::escape(value).replace('"', "&quot;")
}
