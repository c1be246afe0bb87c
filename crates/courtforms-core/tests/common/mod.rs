pub mod forms_server;
