mod test_shader_error;
