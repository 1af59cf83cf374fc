mod aircraft;
