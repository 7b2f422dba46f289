//! Fixed message bodies. The group chat is Russian-speaking, so the texts
//! are too; only the day phrase and the training date vary.

use chrono::Weekday;

/// The welcome/schedule announcement, sent with Markdown parse mode.
pub const WELCOME_MESSAGE: &str = "\
*👋 Привет, будущие Майклы Джорданы и Стефены Керри! 🏀*

*📅 РАСПИСАНИЕ ТРЕНИРОВОК НА СЛЕДУЮЩУЮ НЕДЕЛЮ:*

ВТОРНИК: 🏀 *19:00-20:30*

ЧЕТВЕРГ: 🏀 *19:00-20:30*

*📍 АДРЕС ЗАЛА:* \"Basket Hall\" ул. Салова, 57 корпус 5
(Тот самый зал, где кольцо иногда прощает ваши промахи 😄)

🎉 Выходные - время для:
- Восстановления мышц (и гордости)
- Просмотра матчей НБА для вдохновения
- Рассказов друзьям о своих \"почти как у профессионалов\" бросках

💪 ПОЖЕЛАНИЯ НА НЕДЕЛЮ:

- Пусть ваши броски будут точными, как GPS-навигатор!
- Пусть передачи будут острыми, как свежий перец чили!
- Пусть обводки будут красивыми, как котики из интернета!
- И главное - пусть настроение будет на высоте!";

/// The three fixed attendance poll options, in display order.
pub const POLL_OPTIONS: [&str; 3] = ["✅ Буду", "❌ Не смогу", "🤔 Еще не знаю"];

/// "в/во + weekday" phrase in the accusative, as it reads in a sentence.
pub fn day_phrase(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "в понедельник",
        Weekday::Tue => "во вторник",
        Weekday::Wed => "в среду",
        Weekday::Thu => "в четверг",
        Weekday::Fri => "в пятницу",
        Weekday::Sat => "в субботу",
        Weekday::Sun => "в воскресенье",
    }
}

/// Attendance poll question for a training on `day`, `date` already
/// formatted as dd.mm.yyyy.
pub fn poll_question(day: Weekday, date: &str) -> String {
    format!("Баскетбол {} ({}) 🏀", day_phrase(day), date)
}

/// Companion text posted right after the poll: date, time window, venue.
pub fn poll_companion(day: Weekday, date: &str) -> String {
    format!(
        "Тренировка {} ({}) с 19:00 до 20:30. Кто будет?\n\n\
         💡 Место проведения:\n\
         Basket Hall по адресу ул. Салова, 57 корпус 5.",
        day_phrase(day),
        date
    )
}

/// Same-day training reminder with the kit checklist.
pub fn reminder(day_label: &str) -> String {
    format!(
        "⏰ Напоминание\n\
         Тренировка {} в 19:00-20:30!\n\n\
         Не забудьте:\n\
         • Спортивную форму\n\
         • Кроссовки\n\
         • Воду\n\
         • Хорошее настроение!\n\n\
         Посмотрите результаты вчерашнего опроса, чтобы знать, кто будет сегодня.\n\n\
         💡\n\
         По прибытию на ресепшене можете узнать номер зала и раздевалки.",
        day_label
    )
}
