pub mod answer_form;
