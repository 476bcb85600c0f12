use crate::models::participant::Participant;
use crate::utils::time::{format_iso_date, format_ru_date};
use crate::views::{delete_button, escape, layout};

pub fn list_page(participants: &[Participant]) -> String {
    let mut rows = String::new();
    for participant in participants {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{iin}</td><td>{birth}</td><td>{lmk}</td>\
             <td>{place}</td>\
             <td><a href=\"/participants/edit/{id}\">Изменить</a> {delete}</td></tr>",
            id = participant.id,
            name = escape(&participant.full_name),
            iin = escape(participant.iin.as_deref().unwrap_or("")),
            birth = participant.birth_date.map(format_ru_date).unwrap_or_default(),
            lmk = escape(participant.lmk_number.as_deref().unwrap_or("")),
            place = escape(&participant.place_summary()),
            delete = delete_button(&format!("/participants/delete/{}", participant.id)),
        ));
    }

    let body = format!(
        "<p><a href=\"/participants/new\">Добавить слушателя</a></p>\
         <table><tr><th>№</th><th>ФИО</th><th>ИИН</th><th>Дата рождения</th><th>№ ЛМК</th>\
         <th>Место работы, должность, вид деятельности</th><th></th></tr>{rows}</table>"
    );
    layout("Слушатели", &body)
}

pub fn form_page(participant: Option<&Participant>) -> String {
    let (title, action, submit) = match participant {
        Some(p) => (
            "Изменить слушателя",
            format!("/participants/edit/{}", p.id),
            "Обновить",
        ),
        None => (
            "Новый слушатель",
            "/participants/new".to_string(),
            "Сохранить",
        ),
    };

    let value = |f: fn(&Participant) -> String| participant.map(f).unwrap_or_default();
    let sex = participant.and_then(|p| p.sex.as_deref()).unwrap_or("");
    let selected = |option: &str| if sex == option { " selected" } else { "" };

    let body = format!(
        r#"<form method="post" action="{action}">
<label>ФИО <input name="full_name" value="{full_name}" required></label>
<label>ИИН <input name="iin" value="{iin}" maxlength="12"></label>
<label>Дата рождения <input name="birth_date" type="date" value="{birth_date}"></label>
<label>Пол <select name="sex">
<option value=""></option>
<option value="муж"{sel_m}>муж</option>
<option value="жен"{sel_f}>жен</option>
</select></label>
<label>№ ЛМК <input name="lmk_number" value="{lmk_number}"></label>
<label>Место работы <input name="workplace" value="{workplace}"></label>
<label>Должность <input name="position" value="{position}"></label>
<label>Вид деятельности/услуг <input name="activity_type" value="{activity_type}"></label>
<div class="actions"><button type="submit">{submit}</button> <a href="/participants">Отмена</a></div>
</form>"#,
        full_name = value(|p| escape(&p.full_name)),
        iin = value(|p| escape(p.iin.as_deref().unwrap_or(""))),
        birth_date = value(|p| p.birth_date.map(format_iso_date).unwrap_or_default()),
        sel_m = selected("муж"),
        sel_f = selected("жен"),
        lmk_number = value(|p| escape(p.lmk_number.as_deref().unwrap_or(""))),
        workplace = value(|p| escape(p.workplace.as_deref().unwrap_or(""))),
        position = value(|p| escape(p.position.as_deref().unwrap_or(""))),
        activity_type = value(|p| escape(p.activity_type.as_deref().unwrap_or(""))),
    );
    layout(title, &body)
}
