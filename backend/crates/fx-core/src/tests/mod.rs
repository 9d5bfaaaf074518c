mod message_builder;
