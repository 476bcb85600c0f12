use crate::models::participant::Participant;
use crate::models::program::Program;
use crate::models::training::{Training, TrainingListItem};
use crate::services::export_service::ExportService;
use crate::utils::time::{format_iso_date, format_period, format_ru_date};
use crate::views::{delete_button, escape, layout};

pub fn list_page(trainings: &[TrainingListItem]) -> String {
    let mut rows = String::new();
    for training in trainings {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{participant}</td><td>{program}</td><td>{period}</td>\
             <td>{exam_date}</td><td>{result}</td><td>{next_exam}</td>\
             <td><a href=\"/certificate/{id}\">Свидетельство</a> \
             <a href=\"/trainings/edit/{id}\">Изменить</a> {delete}</td></tr>",
            id = training.id,
            participant = escape(&training.participant_name),
            program = escape(&training.program_name),
            period = format_period(training.training_start_date, training.training_end_date),
            exam_date = format_ru_date(training.exam_date),
            result = ExportService::format_result(training.exam_result, training.exam_percent),
            next_exam = training.next_exam_date.map(format_ru_date).unwrap_or_default(),
            delete = delete_button(&format!("/trainings/delete/{}", training.id)),
        ));
    }

    let body = format!(
        "<p><a href=\"/trainings/new\">Добавить обучение</a></p>\
         <table><tr><th>№</th><th>ФИО слушателя</th><th>Программа</th><th>Период обучения</th>\
         <th>Дата экзамена</th><th>Результат</th><th>Дата очередного экзамена</th><th></th></tr>\
         {rows}</table>"
    );
    layout("Обучения и экзамены", &body)
}

pub fn form_page(
    training: Option<&Training>,
    participants: &[Participant],
    programs: &[Program],
) -> String {
    let (title, action, submit) = match training {
        Some(t) => (
            "Изменить обучение",
            format!("/trainings/edit/{}", t.id),
            "Обновить",
        ),
        None => ("Новое обучение", "/trainings/new".to_string(), "Сохранить"),
    };

    let mut participant_options = String::new();
    for participant in participants {
        let selected = if training.is_some_and(|t| t.participant_id == participant.id) {
            " selected"
        } else {
            ""
        };
        participant_options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            participant.id,
            selected,
            escape(&participant.full_name),
        ));
    }

    let mut program_options = String::new();
    for program in programs {
        let selected = if training.is_some_and(|t| t.program_id == program.id) {
            " selected"
        } else {
            ""
        };
        program_options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            program.id,
            selected,
            escape(&program.name),
        ));
    }

    let date_value = |f: fn(&Training) -> Option<chrono::NaiveDate>| {
        training.and_then(f).map(format_iso_date).unwrap_or_default()
    };

    let body = format!(
        r#"<form method="post" action="{action}">
<label>Слушатель <select name="participant_id" required>{participant_options}</select></label>
<label>Программа <select name="program_id" required>{program_options}</select></label>
<label>Начало обучения <input name="training_start_date" type="date" value="{start}"></label>
<label>Окончание обучения <input name="training_end_date" type="date" value="{end}"></label>
<label>Дата экзамена <input name="exam_date" type="date" value="{exam_date}" required></label>
<label>Всего вопросов <input name="questions_total" type="number" min="0" value="{total}" required></label>
<label>Правильных ответов <input name="correct_answers" type="number" min="0" value="{correct}" required></label>
<div class="actions"><button type="submit">{submit}</button> <a href="/trainings">Отмена</a></div>
</form>"#,
        start = date_value(|t| t.training_start_date),
        end = date_value(|t| t.training_end_date),
        exam_date = training.map(|t| format_iso_date(t.exam_date)).unwrap_or_default(),
        total = training.map(|t| t.questions_total.to_string()).unwrap_or_default(),
        correct = training.map(|t| t.correct_answers.to_string()).unwrap_or_default(),
    );
    layout(title, &body)
}
