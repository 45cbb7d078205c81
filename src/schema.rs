table! {
    #[sql_name = "Cita"]
    cita (id_cita) {
        #[sql_name = "ID_Cita"]
        id_cita -> Integer,
        #[sql_name = "ID_Paciente"]
        id_paciente -> Integer,
        #[sql_name = "ID_Medico"]
        id_medico -> Integer,
        #[sql_name = "Fecha_Hora"]
        fecha_hora -> Datetime,
        #[sql_name = "Motivo_Consulta"]
        motivo_consulta -> Varchar,
        #[sql_name = "Estado"]
        estado -> Nullable<Varchar>,
    }
}

table! {
    #[sql_name = "Especialidad"]
    especialidad (id_especialidad) {
        #[sql_name = "ID_Especialidad"]
        id_especialidad -> Integer,
        #[sql_name = "Nombre_Especialidad"]
        nombre_especialidad -> Varchar,
    }
}

table! {
    #[sql_name = "Medico"]
    medico (id_medico) {
        #[sql_name = "ID_Medico"]
        id_medico -> Integer,
        #[sql_name = "Nombre"]
        nombre -> Varchar,
        #[sql_name = "Apellido"]
        apellido -> Varchar,
        #[sql_name = "ID_Especialidad"]
        id_especialidad -> Integer,
    }
}

table! {
    #[sql_name = "Paciente"]
    paciente (id_paciente) {
        #[sql_name = "ID_Paciente"]
        id_paciente -> Integer,
        #[sql_name = "Nombre"]
        nombre -> Varchar,
        #[sql_name = "Apellido"]
        apellido -> Varchar,
        #[sql_name = "Fecha_Nacimiento"]
        fecha_nacimiento -> Date,
        #[sql_name = "Telefono"]
        telefono -> Varchar,
    }
}

allow_tables_to_appear_in_same_query!(cita, especialidad, medico, paciente,);
