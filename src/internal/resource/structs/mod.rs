pub mod resource_record;
