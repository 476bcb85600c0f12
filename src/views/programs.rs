use crate::models::program::Program;
use crate::views::{delete_button, escape, layout};

pub fn list_page(programs: &[Program]) -> String {
    let mut rows = String::new();
    for program in programs {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{category}</td><td>{theory}</td><td>{exam}</td>\
             <td><a href=\"/programs/edit/{id}\">Изменить</a> {delete}</td></tr>",
            id = program.id,
            name = escape(&program.name),
            category = escape(program.category.as_deref().unwrap_or("")),
            theory = program.theory_hours.map(|h| h.to_string()).unwrap_or_default(),
            exam = program.exam_hours.map(|h| h.to_string()).unwrap_or_default(),
            delete = delete_button(&format!("/programs/delete/{}", program.id)),
        ));
    }

    let body = format!(
        "<p><a href=\"/programs/new\">Добавить программу</a></p>\
         <table><tr><th>№</th><th>Название</th><th>Категория</th>\
         <th>Часы теории</th><th>Часы экзамена</th><th></th></tr>{rows}</table>"
    );
    layout("Программы обучения", &body)
}

pub fn form_page(program: Option<&Program>) -> String {
    let (title, action, submit) = match program {
        Some(p) => (
            "Изменить программу",
            format!("/programs/edit/{}", p.id),
            "Обновить",
        ),
        None => ("Новая программа", "/programs/new".to_string(), "Сохранить"),
    };

    let value = |f: fn(&Program) -> String| program.map(f).unwrap_or_default();

    let body = format!(
        r#"<form method="post" action="{action}">
<label>Название <input name="name" value="{name}" required></label>
<label>Категория <input name="category" value="{category}"></label>
<label>Часы теории <input name="theory_hours" type="number" min="0" value="{theory}"></label>
<label>Часы экзамена <input name="exam_hours" type="number" min="0" value="{exam}"></label>
<div class="actions"><button type="submit">{submit}</button> <a href="/programs">Отмена</a></div>
</form>"#,
        name = value(|p| escape(&p.name)),
        category = value(|p| escape(p.category.as_deref().unwrap_or(""))),
        theory = value(|p| p.theory_hours.map(|h| h.to_string()).unwrap_or_default()),
        exam = value(|p| p.exam_hours.map(|h| h.to_string()).unwrap_or_default()),
    );
    layout(title, &body)
}
